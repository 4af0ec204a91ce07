use log::debug;

use crate::{
    BirthInput, CalendarDate, Cell, ExportError, Exporter, GoalStore, Language, PaperSize, Settings, Theme, WeekIndex,
    WeekSpan, cells, export, file_name,
};

/// The state of one open calendar: what the user typed as a birth date, their
/// goals, and their preferences.
///
/// Nothing derived from the birth date is stored; lived counts, spans and
/// cells are recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    birth:    BirthInput,
    goals:    GoalStore,
    settings: Settings,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Session {
    /// Starts a session with an empty goal store.
    pub fn new(settings: Settings) -> Self {
        Self {
            birth: BirthInput::parse(&settings.birth_date),
            goals: GoalStore::new(),
            settings,
        }
    }

    pub fn set_birth_date(&mut self, raw: &str) {
        debug!("birth date changed to {raw:?}");
        self.birth = BirthInput::parse(raw);
        raw.clone_into(&mut self.settings.birth_date);
    }

    pub const fn birth(&self) -> &BirthInput {
        &self.birth
    }

    pub const fn goals(&self) -> &GoalStore {
        &self.goals
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    pub const fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
    }

    pub const fn set_language(&mut self, language: Language) {
        self.settings.language = language;
    }

    pub const fn set_paper_size(&mut self, paper: PaperSize) {
        self.settings.paper_size = paper;
    }

    pub fn weeks_lived(&self, today: CalendarDate) -> u16 {
        self.birth.weeks_lived(today)
    }

    pub fn span_of(&self, week: WeekIndex) -> Option<WeekSpan> {
        self.birth.span_of(week)
    }

    pub fn cells(&self, today: CalendarDate) -> Vec<Cell<'_>> {
        cells(&self.birth, today, &self.goals)
    }

    pub fn goal(&self, week: WeekIndex) -> Option<&str> {
        self.goals.get(week)
    }

    pub fn save_goal(&mut self, week: WeekIndex, text: &str) {
        self.goals.set(week, text);
    }

    pub fn delete_goal(&mut self, week: WeekIndex) -> Option<String> {
        self.goals.delete(week)
    }

    pub fn export_file_name(&self) -> String {
        file_name(self.birth.date(), self.settings.paper_size)
    }

    /// Hands the snapshot to `exporter` with the current paper size and theme.
    ///
    /// # Errors
    /// Returns whatever the exporter reports.
    pub fn export_with<E: Exporter>(&self, exporter: &mut E, snapshot: &E::Snapshot) -> Result<(), ExportError> {
        export::run(
            exporter,
            snapshot,
            self.settings.export_request(),
            &self.export_file_name(),
        )
    }
}
