/// Soldier stats subject to randomization.
///
/// Names follow the game's `ECharStatType` entries; the `eStat_` prefix used
/// in the game's config files is accepted when parsing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Stat {
    /// Aim
    #[strum(to_string = "Offense", serialize = "eStat_Offense")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_Offense"))]
    Offense = 0,
    /// Tiles moved per action
    #[strum(to_string = "Mobility", serialize = "eStat_Mobility")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_Mobility"))]
    Mobility = 1,
    #[strum(to_string = "HP", serialize = "eStat_HP")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_HP"))]
    HP = 2,
    #[strum(to_string = "Will", serialize = "eStat_Will")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_Will"))]
    Will = 3,
    #[strum(to_string = "Dodge", serialize = "eStat_Dodge")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_Dodge"))]
    Dodge = 4,
    #[strum(to_string = "Hacking", serialize = "eStat_Hacking")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_Hacking"))]
    Hacking = 5,
    /// Psionic strength
    #[strum(to_string = "PsiOffense", serialize = "eStat_PsiOffense")]
    #[cfg_attr(feature = "serde", serde(alias = "eStat_PsiOffense"))]
    PsiOffense = 6,
}

impl Stat {
    /// Total number of stats.
    pub const COUNT: usize = 7;

    /// Returns all stats in order.
    pub const fn all() -> [Stat; Self::COUNT] {
        [
            Stat::Offense,
            Stat::Mobility,
            Stat::HP,
            Stat::Will,
            Stat::Dodge,
            Stat::Hacking,
            Stat::PsiOffense,
        ]
    }

    /// Display name, e.g. `"Offense"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns the stat as an array index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, stat) in Stat::all().into_iter().enumerate() {
            assert_eq!(stat.as_index(), i);
        }
    }

    #[test]
    fn parses_plain_and_prefixed_names() {
        assert_eq!("Offense".parse::<Stat>(), Ok(Stat::Offense));
        assert_eq!("psioffense".parse::<Stat>(), Ok(Stat::PsiOffense));
        assert_eq!("eStat_HP".parse::<Stat>(), Ok(Stat::HP));
        assert!("Strength".parse::<Stat>().is_err());
    }

    #[test]
    fn displays_game_names() {
        assert_eq!(Stat::PsiOffense.to_string(), "PsiOffense");
        assert_eq!(Stat::HP.as_ref(), "HP");
        assert_eq!(Stat::Offense.name(), "Offense");
    }
}
