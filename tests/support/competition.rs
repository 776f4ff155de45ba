use oddsreport::domain::{Competition, CompetitionInfo, Selection};

pub fn make_competition(competition: &str, sport: &str, name: &str, odds: &[i64]) -> Competition {
    let mut comp = Competition::new(CompetitionInfo {
        competition: competition.into(),
        sport: sport.into(),
        name: name.into(),
        ..Default::default()
    });
    for (i, price) in odds.iter().enumerate() {
        let number = u32::try_from(i + 1).unwrap();
        comp.add_selection(Selection::new(number, format!("Selection {number}"), *price, "OK"));
    }
    comp
}
