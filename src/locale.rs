//! UI strings and date formatting for the two supported languages.
//!
//! Lookup is by [`Key`]. Entries missing from a language fall back to English.
//! Placeholders are written `{name}` and filled by [`t_with`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, SettingsError, WeekSpan, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "ru")]
    Ru,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            _ => Err(SettingsError::Unknown {
                kind:  "language",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppTitle,
    AppSubtitle,
    CalendarTitle,
    CalendarSubtitle,
    /// `{birthDate}`
    BornLabel,
    /// `{year}`, `{week}`
    WeekTitle,
    DobLabel,
    PaperSizeLabel,
    LanguageLabel,
    ThemeLabel,
    ThemeLight,
    ThemeDark,
    DownloadButton,
    GeneratingButton,
    /// `{year}`, `{week}`
    GoalModalTitle,
    GoalInputPlaceholder,
    SaveButton,
    DeleteButton,
    CloseButton,
    ExportUnavailable,
    ExportFailed,
    Footer,
}

fn english(key: Key) -> &'static str {
    match key {
        Key::AppTitle => "Life Calendar",
        Key::AppSubtitle => "Each box is a week of your life. A visual reminder that our time is precious.",
        Key::CalendarTitle => "Your Life in Weeks",
        Key::CalendarSubtitle => "Each row is a year, each box is a week",
        Key::BornLabel => "Born: {birthDate}",
        Key::WeekTitle => "Year {year}, Week {week}",
        Key::DobLabel => "Date of Birth",
        Key::PaperSizeLabel => "Paper Size",
        Key::LanguageLabel => "Language",
        Key::ThemeLabel => "Theme",
        Key::ThemeLight => "Light",
        Key::ThemeDark => "Dark",
        Key::DownloadButton => "Download PDF",
        Key::GeneratingButton => "Generating...",
        Key::GoalModalTitle => "Goal for Year {year}, Week {week}",
        Key::GoalInputPlaceholder => "What do you want to achieve this week?",
        Key::SaveButton => "Save",
        Key::DeleteButton => "Delete",
        Key::CloseButton => "Close",
        Key::ExportUnavailable => "PDF generation library is not loaded. Please refresh the page.",
        Key::ExportFailed => "An error occurred while generating the PDF.",
        Key::Footer => "Inspired by the Wait But Why post \"Your Life in Weeks\".",
    }
}

fn russian(key: Key) -> Option<&'static str> {
    let text = match key {
        Key::AppTitle => "Календарь жизни",
        Key::AppSubtitle => "Каждая клетка - неделя вашей жизни. Наглядное напоминание о том, как ценно время.",
        Key::CalendarTitle => "Ваша жизнь в неделях",
        Key::CalendarSubtitle => "Каждая строка - год, каждая клетка - неделя",
        Key::BornLabel => "Дата рождения: {birthDate}",
        Key::WeekTitle => "Год {year}, неделя {week}",
        Key::DobLabel => "Дата рождения",
        Key::PaperSizeLabel => "Размер бумаги",
        Key::LanguageLabel => "Язык",
        Key::ThemeLabel => "Тема",
        Key::ThemeLight => "Светлая",
        Key::ThemeDark => "Тёмная",
        Key::DownloadButton => "Скачать PDF",
        Key::GeneratingButton => "Создание...",
        Key::GoalModalTitle => "Цель на год {year}, неделю {week}",
        Key::GoalInputPlaceholder => "Чего вы хотите достичь на этой неделе?",
        Key::SaveButton => "Сохранить",
        Key::DeleteButton => "Удалить",
        Key::CloseButton => "Закрыть",
        Key::ExportUnavailable => "Библиотека создания PDF не загружена. Обновите страницу.",
        Key::ExportFailed => "При создании PDF произошла ошибка.",
        Key::Footer => return None,
    };
    Some(text)
}

/// The text for `key` in `lang`, without placeholder substitution.
pub fn t(lang: Language, key: Key) -> &'static str {
    match lang {
        Language::En => english(key),
        Language::Ru => russian(key).unwrap_or_else(|| english(key)),
    }
}

/// The text for `key` in `lang` with each `{name}` replaced by its value.
pub fn t_with(lang: Language, key: Key, replacements: &[(&str, &dyn fmt::Display)]) -> String {
    replacements
        .iter()
        .fold(t(lang, key).to_owned(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), &value.to_string())
        })
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English: `Jan 1, 1990`. Russian: `01.01.1990`.
pub fn format_date(date: CalendarDate, lang: Language) -> String {
    let (year, month, day) = date.ymd();
    match lang {
        Language::En => {
            let name = MONTHS_EN[usize::from(month - 1)];
            format!("{name} {day}, {year:04}")
        }
        Language::Ru => format!("{day:02}.{month:02}.{year:04}"),
    }
}

/// Both ends of `span` in `lang`'s date style.
pub fn format_range(span: &WeekSpan, lang: Language) -> String {
    format!(
        "{} - {}",
        format_date(span.start(), lang),
        format_date(span.end(), lang)
    )
}
