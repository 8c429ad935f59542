// Static bilingual page content and literal datasets

mod datasets;
mod language;
pub mod text;

pub use datasets::{
    ChartData, ContainmentZone, DailyCases, DistrictShare, Hotspot, MapData, MapMarker,
    CONTAINMENT_ZONES, DAILY_CASES, DISTRICT_SHARES, HOTSPOTS, MAP_CENTER, MAP_ZOOM,
};
pub use language::{Language, UnknownLanguage};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use text::*;

/// Page sections in the order the landing page stacks them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Hero,
    Stats,
    Features,
    Dashboard,
    Iot,
    Charts,
    Map,
    Reporting,
    GovernmentData,
    Guidelines,
    Initiatives,
    About,
    Footer,
}

impl Section {
    pub const ALL: [Section; 14] = [
        Section::Header,
        Section::Hero,
        Section::Stats,
        Section::Features,
        Section::Dashboard,
        Section::Iot,
        Section::Charts,
        Section::Map,
        Section::Reporting,
        Section::GovernmentData,
        Section::Guidelines,
        Section::Initiatives,
        Section::About,
        Section::Footer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::Stats => "stats",
            Section::Features => "features",
            Section::Dashboard => "dashboard",
            Section::Iot => "iot",
            Section::Charts => "charts",
            Section::Map => "map",
            Section::Reporting => "reporting",
            Section::GovernmentData => "government_data",
            Section::Guidelines => "guidelines",
            Section::Initiatives => "initiatives",
            Section::About => "about",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Section::ALL
            .into_iter()
            .find(|section| section.name() == key)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Text of a single section
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Header(HeaderText),
    Hero(HeroText),
    Stats(StatsText),
    Features(FeaturesText),
    Dashboard(DashboardText),
    Iot(IotText),
    Charts(ChartsText),
    Map(MapText),
    Reporting(ReportingText),
    GovernmentData(GovernmentDataText),
    Guidelines(GuidelinesText),
    Initiatives(InitiativesText),
    About(AboutText),
    Footer(FooterText),
}

/// Look up one section's text in the given language
pub fn section(lang: Language, section: Section) -> SectionContent {
    match section {
        Section::Header => SectionContent::Header(text::header(lang)),
        Section::Hero => SectionContent::Hero(text::hero(lang)),
        Section::Stats => SectionContent::Stats(text::stats(lang)),
        Section::Features => SectionContent::Features(text::features(lang)),
        Section::Dashboard => SectionContent::Dashboard(text::dashboard(lang)),
        Section::Iot => SectionContent::Iot(text::iot(lang)),
        Section::Charts => SectionContent::Charts(text::charts(lang)),
        Section::Map => SectionContent::Map(text::map(lang)),
        Section::Reporting => SectionContent::Reporting(text::reporting(lang)),
        Section::GovernmentData => SectionContent::GovernmentData(text::government_data(lang)),
        Section::Guidelines => SectionContent::Guidelines(text::guidelines(lang)),
        Section::Initiatives => SectionContent::Initiatives(text::initiatives(lang)),
        Section::About => SectionContent::About(text::about(lang)),
        Section::Footer => SectionContent::Footer(text::footer(lang)),
    }
}

/// Every section of the landing page in one language.
///
/// Carries the language toggle so a front end can render the header button
/// without a second lookup.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub language: Language,
    pub toggle_label: &'static str,
    pub header: HeaderText,
    pub hero: HeroText,
    pub stats: StatsText,
    pub features: FeaturesText,
    pub dashboard: DashboardText,
    pub iot: IotText,
    pub charts: ChartsText,
    pub map: MapText,
    pub reporting: ReportingText,
    pub government_data: GovernmentDataText,
    pub guidelines: GuidelinesText,
    pub initiatives: InitiativesText,
    pub about: AboutText,
    pub footer: FooterText,
}

impl PageContent {
    pub fn for_language(lang: Language) -> Self {
        Self {
            language: lang,
            toggle_label: lang.toggle_label(),
            header: text::header(lang),
            hero: text::hero(lang),
            stats: text::stats(lang),
            features: text::features(lang),
            dashboard: text::dashboard(lang),
            iot: text::iot(lang),
            charts: text::charts(lang),
            map: text::map(lang),
            reporting: text::reporting(lang),
            government_data: text::government_data(lang),
            guidelines: text::guidelines(lang),
            initiatives: text::initiatives(lang),
            about: text::about(lang),
            footer: text::footer(lang),
        }
    }
}
