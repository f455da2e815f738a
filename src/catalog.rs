use std::collections::HashMap;

/// One known club: the name shown to the user, the name the classifier was
/// trained on (often abbreviated), and the logo asset path.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub display_name: &'static str,
    pub model_identifier: &'static str,
    pub logo: &'static str,
}

/// Static reference table of tracked clubs.
///
/// The classifier's label encoder knows teams under abbreviated names
/// ("Man City", "Wolves"), so this table is the single source of truth for
/// that mapping. Lookups are case- and whitespace-insensitive; a miss is a
/// normal outcome, e.g. a cup opponent from outside the league.
#[derive(Debug)]
pub struct TeamCatalog {
    by_name: HashMap<String, TeamRecord>,
}

impl TeamCatalog {
    pub fn new(records: impl IntoIterator<Item = TeamRecord>) -> Self {
        let by_name = records
            .into_iter()
            .map(|r| (normalize(r.display_name), r))
            .collect();
        Self { by_name }
    }

    /// The 2024/25 Premier League table.
    pub fn premier_league() -> Self {
        Self::new(PREMIER_LEAGUE_TEAMS.iter().cloned())
    }

    pub fn lookup(&self, display_name: &str) -> Option<&TeamRecord> {
        self.by_name.get(&normalize(display_name))
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.lookup(display_name).is_some()
    }

    /// Classifier-facing identifier, falling back to the raw display name
    /// for teams outside the table. The fallback is intentional: a request
    /// for an untracked team should still reach the classifier, which does
    /// its own membership check.
    pub fn model_identifier<'a>(&'a self, display_name: &'a str) -> &'a str {
        match self.lookup(display_name) {
            Some(record) => record.model_identifier,
            None => display_name,
        }
    }

    /// Records in display order, for the selection lists.
    pub fn teams(&self) -> Vec<&TeamRecord> {
        let mut all: Vec<&TeamRecord> = self.by_name.values().collect();
        all.sort_by_key(|r| r.display_name);
        all
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

const PREMIER_LEAGUE_TEAMS: [TeamRecord; 20] = [
    team("Arsenal", "Arsenal", "logos/premier-league/Arsenal.png"),
    team("Aston Villa", "Aston Villa", "logos/premier-league/AstonVilla.png"),
    team("Bournemouth", "Bournemouth", "logos/premier-league/Bournemouth.png"),
    team("Brentford", "Brentford", "logos/premier-league/Brentford.png"),
    team(
        "Brighton & Hove Albion",
        "Brighton",
        "logos/premier-league/Brighton&HoveAlbion.png",
    ),
    team("Chelsea", "Chelsea", "logos/premier-league/Chelsea.png"),
    team("Crystal Palace", "Crystal Palace", "logos/premier-league/CrystalPalace.png"),
    team("Everton", "Everton", "logos/premier-league/Everton.png"),
    team("Fulham", "Fulham", "logos/premier-league/Fulham.png"),
    team("Ipswich Town", "Ipswich", "logos/premier-league/IpswichTown.png"),
    team("Leicester City", "Leicester", "logos/premier-league/LeicesterCity.png"),
    team("Liverpool", "Liverpool", "logos/premier-league/Liverpool.png"),
    team("Manchester City", "Man City", "logos/premier-league/ManchesterCity.png"),
    team("Manchester United", "Man United", "logos/premier-league/ManchesterUnited.png"),
    team("Newcastle United", "Newcastle", "logos/premier-league/NewcastleUnited.png"),
    team(
        "Nottingham Forest",
        "Nott'm Forest",
        "logos/premier-league/NottinghamForest.png",
    ),
    team("Southampton", "Southampton", "logos/premier-league/Southampton.png"),
    team("Tottenham Hotspur", "Tottenham", "logos/premier-league/TottenhamHotspur.png"),
    team("West Ham United", "West Ham", "logos/premier-league/WestHamUnited.png"),
    team(
        "Wolverhampton Wanderers",
        "Wolves",
        "logos/premier-league/WolverhamptonWanderers.png",
    ),
];

const fn team(
    display_name: &'static str,
    model_identifier: &'static str,
    logo: &'static str,
) -> TeamRecord {
    TeamRecord {
        display_name,
        model_identifier,
        logo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let catalog = TeamCatalog::premier_league();
        let record = catalog.lookup("  manchester city ").unwrap();
        assert_eq!(record.display_name, "Manchester City");
        assert_eq!(record.model_identifier, "Man City");
    }

    #[test]
    fn unknown_team_is_none_not_error() {
        let catalog = TeamCatalog::premier_league();
        assert!(catalog.lookup("Real Madrid").is_none());
        assert!(!catalog.contains("Real Madrid"));
    }

    #[test]
    fn model_identifier_falls_back_to_raw_name() {
        let catalog = TeamCatalog::premier_league();
        assert_eq!(catalog.model_identifier("Wolverhampton Wanderers"), "Wolves");
        assert_eq!(catalog.model_identifier("Real Madrid"), "Real Madrid");
    }

    #[test]
    fn full_league_is_present() {
        let catalog = TeamCatalog::premier_league();
        assert_eq!(catalog.teams().len(), 20);
    }
}
