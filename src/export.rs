//! The boundary with the PDF export pipeline.
//!
//! Capturing the rendered grid and encoding the document belong to the host.
//! This module only decides what the host is asked for: page size, background
//! colour, where the captured image sits on the page, and the file name.

use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Key, PAGE_MARGIN_MM, SettingsError, prelude::*};

/// Supported paper sizes, always printed landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    #[display(fmt = "A3")]
    A3,
    #[display(fmt = "A2")]
    A2,
}

/// Page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm:  f64,
    pub height_mm: f64,
}

impl PaperSize {
    pub const ALL: [Self; 2] = [Self::A3, Self::A2];

    /// Landscape page dimensions.
    pub const fn landscape(self) -> PageSize {
        match self {
            Self::A3 => PageSize {
                width_mm:  420.0,
                height_mm: 297.0,
            },
            Self::A2 => PageSize {
                width_mm:  594.0,
                height_mm: 420.0,
            },
        }
    }
}

impl FromStr for PaperSize {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A3" => Ok(Self::A3),
            "A2" => Ok(Self::A2),
            _ => Err(SettingsError::Unknown {
                kind:  "paper size",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[display(fmt = "light")]
    Light,
    #[default]
    #[display(fmt = "dark")]
    Dark,
}

impl Theme {
    /// Background colour the captured image is painted on.
    pub const fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#111827",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(SettingsError::Unknown {
                kind:  "theme",
                value: s.to_owned(),
            }),
        }
    }
}

/// Everything the export pipeline needs from the core besides the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    pub paper: PaperSize,
    pub theme: Theme,
}

/// Where the captured image goes on the page, in millimetres from the top left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x_mm:      f64,
    pub y_mm:      f64,
    pub width_mm:  f64,
    pub height_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("Captured image is empty ({width}x{height} px)")]
    EmptyImage { width: u32, height: u32 },

    #[error("Export backend is not available")]
    Unavailable,

    #[error("Export failed: {0}")]
    Backend(String),
}

impl ExportError {
    /// The message shown to the user for this failure.
    pub const fn message_key(&self) -> Key {
        match self {
            Self::Unavailable => Key::ExportUnavailable,
            Self::EmptyImage { .. } | Self::Backend(_) => Key::ExportFailed,
        }
    }
}

/// Implemented by the host: renders `snapshot` to an image, lays it out with
/// [`fit_image`] and offers the document for download under `file_name`.
pub trait Exporter {
    type Snapshot: ?Sized;

    /// # Errors
    /// Returns `ExportError` when capturing or writing the document fails.
    fn export(&mut self, snapshot: &Self::Snapshot, request: ExportRequest, file_name: &str) -> Result<(), ExportError>;
}

/// Runs an export and logs the outcome.
///
/// # Errors
/// Passes through whatever the exporter reports.
pub(crate) fn run<E: Exporter>(
    exporter: &mut E,
    snapshot: &E::Snapshot,
    request: ExportRequest,
    file_name: &str,
) -> Result<(), ExportError> {
    match exporter.export(snapshot, request, file_name) {
        Ok(()) => {
            info!("exported {file_name} ({} {})", request.paper, request.theme);
            Ok(())
        }
        Err(err) => {
            warn!("export of {file_name} failed: {err}");
            Err(err)
        }
    }
}

/// Scales an image of `width_px` x `height_px` to fit a landscape `paper`
/// page inside the margins, keeping its aspect ratio, centred.
///
/// # Errors
/// Returns `ExportError::EmptyImage` if either dimension is zero.
pub fn fit_image(paper: PaperSize, width_px: u32, height_px: u32) -> Result<Placement, ExportError> {
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyImage {
            width:  width_px,
            height: height_px,
        });
    }

    let page = paper.landscape();
    let aspect = f64::from(width_px) / f64::from(height_px);
    let max_width = page.width_mm - 2.0 * PAGE_MARGIN_MM;
    let max_height = page.height_mm - 2.0 * PAGE_MARGIN_MM;

    let (width_mm, height_mm) = if max_width / aspect > max_height {
        (max_height * aspect, max_height)
    } else {
        (max_width, max_width / aspect)
    };

    Ok(Placement {
        x_mm: (page.width_mm - width_mm) / 2.0,
        y_mm: (page.height_mm - height_mm) / 2.0,
        width_mm,
        height_mm,
    })
}

/// `life-calendar-<birth date>-<paper>.pdf`; the date part is left out when
/// no birth date is set.
pub fn file_name(birth: Option<CalendarDate>, paper: PaperSize) -> String {
    birth.map_or_else(
        || format!("life-calendar-{paper}.pdf"),
        |date| format!("life-calendar-{date}-{paper}.pdf"),
    )
}
