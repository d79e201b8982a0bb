//! Fixtures shared by the unit tests in this crate.

use ustr::Ustr;

use crate::Person;

pub fn person(name: &str, role: &str, age: u32) -> Person {
    let handle = name.to_lowercase().replace(' ', ".");
    Person {
        name: name.to_owned(),
        username: Ustr::from(&format!("@{handle}")),
        image: format!("images/{handle}.png"),
        status: "Active".to_owned(),
        role: Ustr::from(role),
        email: format!("{handle}@example.com"),
        teams: vec!["Design".to_owned(), "Product".to_owned()],
        age,
    }
}

pub fn with_teams(mut person: Person, teams: &[&str]) -> Person {
    person.teams = teams.iter().map(|team| (*team).to_owned()).collect();
    person
}

/// Twelve people across three roles: 4 designers, 5 engineers, 3 managers.
///
/// Ages repeat (31 and 45 appear twice) so sort stability is observable.
pub fn twelve_people() -> Vec<Person> {
    vec![
        person("Olivia Rhye", "Designer", 31),
        person("Phoenix Baker", "Engineer", 45),
        person("Lana Steiner", "Manager", 28),
        person("Demi Wilkinson", "Engineer", 31),
        person("Candice Wu", "Designer", 52),
        person("Natali Craig", "Engineer", 24),
        person("Drew Cano", "Manager", 45),
        person("Orlando Diggs", "Designer", 39),
        person("Andi Lane", "Engineer", 36),
        person("Kate Morrison", "Manager", 27),
        person("Ava Bennett", "Designer", 44),
        person("Noah Turner", "Engineer", 33),
    ]
}
