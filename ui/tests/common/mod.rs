use chrono::Duration;
use directory_business::{Dataset, DirectoryState, Person};
use directory_states::Time;
use directory_ui::state::State;
use egui_kittest::Harness;
use egui::accesskit::Role;
use kittest::{By, Queryable};
use ustr::Ustr;

/// Large enough for a full page of ten rows and every column.
const HARNESS_SIZE: egui::Vec2 = egui::vec2(1800.0, 1400.0);

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    pub fn new() -> Self {
        Self::with_people(twelve_people())
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = State::test(Dataset::new(people));
        let harness = Harness::builder().with_size(HARNESS_SIZE).build_ui_state(
            |ui, state: &mut State| {
                directory_ui::widgets::directory_panel(&mut state.ctx, ui);
            },
            state,
        );

        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    pub fn directory(&self) -> &DirectoryState {
        self.harness.state().ctx.state::<DirectoryState>()
    }

    pub fn directory_mut(&mut self) -> &mut DirectoryState {
        self.harness.state_mut().ctx.state_mut::<DirectoryState>()
    }

    #[allow(unused)]
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.harness.state().ctx.state::<Time>().now()
    }

    #[allow(unused)]
    pub fn advance_millis(&mut self, millis: i64) {
        self.harness
            .state_mut()
            .ctx
            .update::<Time>(|time| time.advance(Duration::milliseconds(millis)));
    }

    pub fn step(&mut self) {
        self.harness.step();
    }

    #[allow(unused)]
    pub fn has_label(&self, label: &str) -> bool {
        self.harness
            .query_all_by_label_contains(label)
            .next()
            .is_some()
    }

    /// Combo boxes expose their selected text as the node value, not a label.
    #[allow(unused)]
    pub fn has_combo_value(&self, value: &str) -> bool {
        self.harness
            .query_all(By::new().role(Role::ComboBox).value(value))
            .next()
            .is_some()
    }
}

pub fn person(name: &str, role: &str, age: u32, teams: &[&str]) -> Person {
    let handle = name.to_lowercase().replace(' ', ".");
    Person {
        name: name.to_owned(),
        username: Ustr::from(&format!("@{handle}")),
        image: format!("images/{handle}.png"),
        status: "Active".to_owned(),
        role: Ustr::from(role),
        email: format!("{handle}@example.com"),
        teams: teams.iter().map(|team| (*team).to_owned()).collect(),
        age,
    }
}

/// Twelve people across three roles: 4 designers, 5 engineers, 3 managers.
pub fn twelve_people() -> Vec<Person> {
    let teams = ["Design", "Product"];
    vec![
        person("Olivia Rhye", "Designer", 31, &teams),
        person("Phoenix Baker", "Engineer", 45, &teams),
        person("Lana Steiner", "Manager", 28, &teams),
        person("Demi Wilkinson", "Engineer", 31, &teams),
        person("Candice Wu", "Designer", 52, &teams),
        person("Natali Craig", "Engineer", 24, &teams),
        person("Drew Cano", "Manager", 45, &teams),
        person("Orlando Diggs", "Designer", 39, &teams),
        person("Andi Lane", "Engineer", 36, &teams),
        person("Kate Morrison", "Manager", 27, &teams),
        person("Ava Bennett", "Designer", 44, &teams),
        person("Noah Turner", "Engineer", 33, &teams),
    ]
}
