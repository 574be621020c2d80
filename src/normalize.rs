//! Title normalization per theater chain.
//!
//! Chains decorate titles differently (full-width brackets, rating suffixes,
//! 【IMAX・字幕】 prefixes). `normalize_title` strips the decoration and
//! reports the subtitle and screen format it carried.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static BRACKET_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【.*?】").expect("valid bracket tag regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TheaterSeries {
    Toho,
    Movix,
    Aeon,
    Tjoy,
    United,
    Other,
}

impl TheaterSeries {
    /// Classify a theater by the chain name embedded in its Japanese name.
    pub fn from_theater_name(name: &str) -> Self {
        if name.contains("TOHOシネマズ") {
            TheaterSeries::Toho
        } else if name.contains("MOVIX") {
            TheaterSeries::Movix
        } else if name.contains("イオンシネマ") {
            TheaterSeries::Aeon
        } else if name.contains("ジョイ") {
            TheaterSeries::Tjoy
        } else if name.contains("ユナイテッド") {
            TheaterSeries::United
        } else {
            TheaterSeries::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subtitle {
    Original,
    Caption,
    Dub,
}

impl Subtitle {
    pub fn label(self) -> &'static str {
        match self {
            Subtitle::Original => "",
            Subtitle::Caption => "字幕",
            Subtitle::Dub => "吹替",
        }
    }

    fn detect(title: &str) -> Self {
        if title.contains("字幕") {
            Subtitle::Caption
        } else if title.contains("吹替") {
            Subtitle::Dub
        } else {
            Subtitle::Original
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreenType {
    Standard,
    FourDx,
    Imax,
    ImaxLaser,
    Dolby,
    Bestia,
}

impl ScreenType {
    pub fn label(self) -> &'static str {
        match self {
            ScreenType::Standard => "",
            ScreenType::FourDx => "4DX",
            ScreenType::Imax => "IMAX",
            ScreenType::ImaxLaser => "IMAXレーザー",
            ScreenType::Dolby => "DOLBY",
            ScreenType::Bestia => "BESTIA",
        }
    }

    fn detect(title: &str) -> Self {
        // laser before plain IMAX, the shorter tag is a prefix of it
        if title.contains("4DX") {
            ScreenType::FourDx
        } else if title.contains("IMAXレーザー") {
            ScreenType::ImaxLaser
        } else if title.contains("IMAX") {
            ScreenType::Imax
        } else if title.contains("DOLBY") {
            ScreenType::Dolby
        } else if title.contains("BESTIA") {
            ScreenType::Bestia
        } else {
            ScreenType::Standard
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTitle {
    pub title: String,
    pub subtitle: Subtitle,
    pub screen_type: ScreenType,
}

/// Strip chain-specific decoration from a scraped title.
///
/// Subtitle and screen type are read from the raw title before cleanup.
pub fn normalize_title(title: &str, series: TheaterSeries) -> NormalizedTitle {
    let subtitle = Subtitle::detect(title);
    let screen_type = ScreenType::detect(title);

    let title = match series {
        TheaterSeries::Tjoy => {
            let without_rating = title.split("(PG").next().unwrap_or_default().trim();
            BRACKET_TAG.replace_all(without_rating, "").trim().to_string()
        }
        TheaterSeries::United => title
            .split('（')
            .next()
            .unwrap_or_default()
            .trim()
            .replace("IMAX", "")
            .replace("4DX2D", "")
            .replace("DOLBY", "")
            .trim()
            .to_string(),
        TheaterSeries::Toho | TheaterSeries::Movix | TheaterSeries::Aeon | TheaterSeries::Other => {
            title.replace('（', "(").replace('）', ")")
        }
    };

    NormalizedTitle {
        title,
        subtitle,
        screen_type,
    }
}
