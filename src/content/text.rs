// Bilingual text tables for every page section.
//
// Each section has one const per language; both must carry the same number
// of entries in every list (checked in tests).

use super::Language;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, Serialize)]
pub struct HeaderText {
    pub nav: &'static [&'static str],
    pub emergency: &'static str,
    pub login: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuickStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroText {
    pub alert: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub slogan: &'static str,
    pub description: &'static str,
    pub report_case: &'static str,
    pub view_dashboard: &'static str,
    pub quick_stats: &'static [QuickStat],
}

#[derive(Clone, Debug, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Clone, Debug, Serialize)]
pub struct DistrictStat {
    pub name: &'static str,
    pub cases: u32,
    pub growth: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: &'static [StatCard],
    pub change_suffix: &'static str,
    pub districts: &'static str,
    pub district_list: &'static [DistrictStat],
}

#[derive(Clone, Debug, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct TitledList {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize)]
pub struct FeaturesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [Feature],
    pub usp: TitledList,
}

#[derive(Clone, Debug, Serialize)]
pub struct StatusLabels {
    pub critical: &'static str,
    pub warning: &'static str,
    pub stable: &'static str,
    pub recovered: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_patients: &'static str,
    pub critical_alerts: &'static str,
    pub active_monitoring: &'static str,
    pub patient_status: &'static str,
    pub vitals: &'static str,
    pub location: &'static str,
    pub last_update: &'static str,
    pub contact_patient: &'static str,
    pub view_on_map: &'static str,
    pub alert_healthcare: &'static str,
    pub status: StatusLabels,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTypeLabels {
    pub smartwatch: &'static str,
    pub thermometer: &'static str,
    pub pulse_oximeter: &'static str,
    pub smartphone: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IotText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub connected_devices: &'static str,
    pub active_alerts: &'static str,
    pub data_points: &'static str,
    pub device_status: &'static str,
    pub battery: &'static str,
    pub last_reading: &'static str,
    pub threshold: &'static str,
    pub reconnect: &'static str,
    pub view_history: &'static str,
    pub device_types: DeviceTypeLabels,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub daily_trend: &'static str,
    pub district_wise: &'static str,
    pub recovery_rate: &'static str,
    pub cases: &'static str,
    pub recovered: &'static str,
    pub deaths: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct MapLegend {
    pub critical: &'static str,
    pub warning: &'static str,
    pub stable: &'static str,
    pub containment: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct MapText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub legend: MapLegend,
}

#[derive(Clone, Debug, Serialize)]
pub struct FormLabels {
    pub name: &'static str,
    pub phone: &'static str,
    pub district: &'static str,
    pub symptoms: &'static str,
    pub description: &'static str,
    pub submit: &'static str,
    pub emergency: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub action: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: FormLabels,
    pub symptoms_list: &'static [&'static str],
    pub districts: &'static [&'static str],
    pub quick_actions_title: &'static str,
    pub quick_actions: &'static [QuickAction],
}

#[derive(Clone, Debug, Serialize)]
pub struct Portal {
    pub name: &'static str,
    pub url: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentDataText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub dashboard: &'static str,
    pub dashboard_desc: &'static str,
    pub portals: &'static str,
    pub portal_list: &'static [Portal],
}

#[derive(Clone, Debug, Serialize)]
pub struct Guideline {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
    pub available: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelinesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub central_gov: &'static str,
    pub state_gov: &'static str,
    pub helpline: &'static str,
    pub central_guidelines: &'static [Guideline],
    pub state_guidelines: &'static [Guideline],
    pub helpline_numbers: &'static [Helpline],
}

#[derive(Clone, Debug, Serialize)]
pub struct Initiative {
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Debug, Serialize)]
pub struct InitiativesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub initiatives: &'static [Initiative],
}

#[derive(Clone, Debug, Serialize)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub mission: &'static str,
    pub mission_text: &'static str,
    pub values: &'static [Value],
    pub impact: TitledList,
    pub commitment: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct FooterContact {
    pub title: &'static str,
    pub emergency: &'static str,
    pub support: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterText {
    pub slogan: &'static str,
    pub description: &'static str,
    pub quick_links: TitledList,
    pub contact: FooterContact,
    pub legal: TitledList,
    pub copyright: &'static str,
    pub built_with: &'static str,
}

// ── Header ──────────────────────────────────────────────────────────────────

const HEADER_EN: HeaderText = HeaderText {
    nav: &[
        "Dashboard",
        "Report Case",
        "Statistics",
        "About",
        "Contact",
    ],
    emergency: "Emergency: 104",
    login: "Health Worker Login",
};

const HEADER_MR: HeaderText = HeaderText {
    nav: &[
        "डॅशबोर्ड",
        "केस नोंदवा",
        "आकडेवारी",
        "आमच्याबद्दल",
        "संपर्क",
    ],
    emergency: "आणीबाणी: 104",
    login: "आरोग्य कर्मचारी लॉगिन",
};

// ── Hero ────────────────────────────────────────────────────────────────────

const SLOGAN: &str = "तुमचं आरोग्य, आमचं कर्तव्य!";

const HERO_EN: HeroText = HeroText {
    alert: "COVID-19 Alert: Stay Vigilant, Stay Safe",
    title: "Real-Time COVID Suspect Tracking",
    subtitle: "for Maharashtra",
    slogan: SLOGAN,
    description: "MahaRakshak enables community-driven COVID-19 suspect tracking across Maharashtra. Report symptoms, track hotspots, and help prevent the spread.",
    report_case: "Report Suspected Case",
    view_dashboard: "View Dashboard",
    quick_stats: &[
        QuickStat {
            value: "154",
            label: "New Cases Since May 19",
        },
        QuickStat {
            value: "2.5M+",
            label: "Citizens Protected",
        },
        QuickStat {
            value: "36",
            label: "Districts Covered",
        },
    ],
};

const HERO_MR: HeroText = HeroText {
    alert: "COVID-19 Alert: Stay Vigilant, Stay Safe",
    title: "रिअल-टाइम कोविड संशयित ट्रॅकिंग",
    subtitle: "महाराष्ट्रासाठी",
    slogan: SLOGAN,
    description: "महाराक्षक महाराष्ट्रातील समुदाय-चालित कोविड-19 संशयित ट्रॅकिंग सक्षम करते. लक्षणे नोंदवा, हॉटस्पॉट्स ट्रॅक करा आणि प्रसार रोखण्यास मदत करा.",
    report_case: "संशयित केस नोंदवा",
    view_dashboard: "डॅशबोर्ड पहा",
    quick_stats: &[
        QuickStat {
            value: "154",
            label: "19 मे पासून नवे केसेस",
        },
        QuickStat {
            value: "2.5M+",
            label: "संरक्षित नागरिक",
        },
        QuickStat {
            value: "36",
            label: "जिल्हे समाविष्ट",
        },
    ],
};

// ── Statistics ──────────────────────────────────────────────────────────────

const STATS_EN: StatsText = StatsText {
    title: "Real-Time Maharashtra COVID Statistics",
    subtitle: "Updated every 15 minutes with latest data from health authorities",
    stats: &[
        StatCard {
            label: "Active Cases",
            value: "1,247",
            change: "+12%",
            trend: Trend::Up,
        },
        StatCard {
            label: "Recovered Cases",
            value: "45,892",
            change: "+0.8%",
            trend: Trend::Up,
        },
        StatCard {
            label: "Daily New Cases",
            value: "43",
            change: "-23%",
            trend: Trend::Down,
        },
        StatCard {
            label: "Under Observation",
            value: "892",
            change: "+5%",
            trend: Trend::Up,
        },
    ],
    change_suffix: "from yesterday",
    districts: "Top Affected Districts",
    district_list: &[
        DistrictStat {
            name: "Mumbai",
            cases: 234,
            growth: "+8%",
        },
        DistrictStat {
            name: "Pune",
            cases: 156,
            growth: "+12%",
        },
        DistrictStat {
            name: "Nagpur",
            cases: 89,
            growth: "+3%",
        },
        DistrictStat {
            name: "Nashik",
            cases: 67,
            growth: "+15%",
        },
    ],
};

const STATS_MR: StatsText = StatsText {
    title: "रिअल-टाइम महाराष्ट्र कोविड आकडेवारी",
    subtitle: "आरोग्य अधिकाऱ्यांकडून नवीनतम डेटासह दर 15 मिनिटांनी अपडेट केले जाते",
    stats: &[
        StatCard {
            label: "सक्रिय केसेस",
            value: "1,247",
            change: "+12%",
            trend: Trend::Up,
        },
        StatCard {
            label: "बरे झालेले केसेस",
            value: "45,892",
            change: "+0.8%",
            trend: Trend::Up,
        },
        StatCard {
            label: "दैनिक नवे केसेस",
            value: "43",
            change: "-23%",
            trend: Trend::Down,
        },
        StatCard {
            label: "निरीक्षणाधीन",
            value: "892",
            change: "+5%",
            trend: Trend::Up,
        },
    ],
    change_suffix: "from yesterday",
    districts: "सर्वाधिक बाधित जिल्हे",
    district_list: &[
        DistrictStat {
            name: "मुंबई",
            cases: 234,
            growth: "+8%",
        },
        DistrictStat {
            name: "पुणे",
            cases: 156,
            growth: "+12%",
        },
        DistrictStat {
            name: "नागपूर",
            cases: 89,
            growth: "+3%",
        },
        DistrictStat {
            name: "नाशिक",
            cases: 67,
            growth: "+15%",
        },
    ],
};

// ── Features ────────────────────────────────────────────────────────────────

const FEATURES_EN: FeaturesText = FeaturesText {
    title: "How MahaRakshak is Different",
    subtitle: "Built specifically for Maharashtra with unique features that set us apart",
    features: &[
        Feature {
            title: "Hyperlocal Focus",
            description: "Unlike national-level apps, MahaRakshak zooms in on Maharashtra's district and taluka-level data for precise tracking.",
            highlight: "District & Taluka Level",
        },
        Feature {
            title: "Public Participation",
            description: "Encourages community-driven suspect tracking, not just clinical case recording. Every citizen can contribute.",
            highlight: "Community Driven",
        },
        Feature {
            title: "Web-First Design",
            description: "No app installation needed — runs smoothly on any browser, even low-end smartphones. Accessible to everyone.",
            highlight: "Device Agnostic",
        },
        Feature {
            title: "AI-Powered Insights",
            description: "Advanced analytics and prediction models help identify potential hotspots before they become critical.",
            highlight: "Smart Predictions",
        },
        Feature {
            title: "Privacy Protected",
            description: "Your personal data is encrypted and protected. Only anonymized data is used for public health insights.",
            highlight: "Secure & Private",
        },
        Feature {
            title: "Real-Time Updates",
            description: "Get instant notifications about cases in your area and government health advisories.",
            highlight: "Live Monitoring",
        },
    ],
    usp: TitledList {
        title: "Unique Selling Proposition",
        points: &[
            "Localized + Inclusive: First COVID suspect tracker designed for Maharashtra, in Marathi-English format",
            "Real-Time, Community-Enabled: Harnesses public data to empower both citizens and health workers",
            "Built for Action: Not just a tracker — it's a decision-making tool for authorities and an alert system for citizens",
            "Future-Ready: Modular design supports AI-based risk prediction, vaccination tracking, or travel pass integration",
        ],
    },
};

const FEATURES_MR: FeaturesText = FeaturesText {
    title: "महाराक्षक कसा वेगळा आहे",
    subtitle: "महाराष्ट्रासाठी विशेषतः तयार केलेली अनोखी वैशिष्ट्ये",
    features: &[
        Feature {
            title: "अतिस्थानिक फोकस",
            description: "राष्ट्रीय स्तरावरील ॲप्सच्या विपरीत, महाराक्षक महाराष्ट्राच्या जिल्हा आणि तालुका स्तरावरील डेटावर केंद्रित आहे.",
            highlight: "जिल्हा आणि तालुका स्तर",
        },
        Feature {
            title: "सार्वजनिक सहभाग",
            description: "केवळ क्लिनिकल केस रेकॉर्डिंग नाही तर समुदाय-चालित संशयित ट्रॅकिंगला प्रोत्साहन देते. प्रत्येक नागरिक योगदान देऊ शकतो.",
            highlight: "समुदाय चालित",
        },
        Feature {
            title: "वेब-फर्स्ट डिझाइन",
            description: "ॲप इन्स्टॉलेशनची गरज नाही — कोणत्याही ब्राउझरवर, अगदी कमी दर्जाच्या स्मार्टफोनवरही सहजपणे चालते.",
            highlight: "डिव्हाइस अज्ञेयवादी",
        },
        Feature {
            title: "AI-पॉवर्ड अंतर्दृष्टी",
            description: "प्रगत विश्लेषणे आणि अंदाज मॉडेल्स संभावित हॉटस्पॉट्स गंभीर होण्यापूर्वी ओळखण्यास मदत करतात.",
            highlight: "स्मार्ट अंदाज",
        },
        Feature {
            title: "गोपनीयता संरक्षित",
            description: "तुमचा वैयक्तिक डेटा एन्क्रिप्टेड आणि संरक्षित आहे. सार्वजनिक आरोग्य अंतर्दृष्टीसाठी फक्त अनामिक डेटा वापरला जातो.",
            highlight: "सुरक्षित आणि खाजगी",
        },
        Feature {
            title: "रिअल-टाइम अपडेट्स",
            description: "तुमच्या क्षेत्रातील प्रकरणे आणि सरकारी आरोग्य सल्ल्यांबद्दल तत्काळ सूचना मिळवा.",
            highlight: "थेट निरीक्षण",
        },
    ],
    usp: TitledList {
        title: "अनन्य विक्री प्रस्ताव",
        points: &[
            "स्थानिकीकृत + समावेशक: महाराष्ट्रासाठी डिझाइन केलेला पहिला कोविड संशयित ट्रॅकर, मराठी-इंग्रजी स्वरूपात",
            "रिअल-टाइम, समुदाय-सक्षम: नागरिक आणि आरोग्य कर्मचारी दोघांना सक्षम करण्यासाठी सार्वजनिक डेटाचा वापर करते",
            "कृतीसाठी तयार: केवळ ट्रॅकर नाही — अधिकाऱ्यांसाठी निर्णय घेण्याचे साधन आणि नागरिकांसाठी चेतावणी प्रणाली",
            "भविष्यासाठी तयार: मॉड्यूलर डिझाइन AI-आधारित जोखीम अंदाज, लसीकरण ट्रॅकिंग किंवा प्रवास पास एकीकरणास समर्थन देते",
        ],
    },
};

// ── Patient tracking dashboard ──────────────────────────────────────────────

const DASHBOARD_EN: DashboardText = DashboardText {
    title: "Intelligent COVID Patient Tracking - Rakshak",
    subtitle: "Real-time IoT-enabled health monitoring system",
    total_patients: "Total Patients",
    critical_alerts: "Critical Alerts",
    active_monitoring: "Active Monitoring",
    patient_status: "Patient Status",
    vitals: "Vital Signs",
    location: "Location",
    last_update: "Last Update",
    contact_patient: "Contact Patient",
    view_on_map: "View on Map",
    alert_healthcare: "Alert Healthcare Provider",
    status: StatusLabels {
        critical: "Critical",
        warning: "Warning",
        stable: "Stable",
        recovered: "Recovered",
    },
};

const DASHBOARD_MR: DashboardText = DashboardText {
    title: "बुद्धिमान कोविड रुग्ण ट्रॅकिंग - राक्षक",
    subtitle: "रिअल-टाइम IoT-सक्षम आरोग्य निरीक्षण प्रणाली",
    total_patients: "एकूण रुग्ण",
    critical_alerts: "गंभीर अलर्ट",
    active_monitoring: "सक्रिय निरीक्षण",
    patient_status: "रुग्णाची स्थिती",
    vitals: "महत्वाचे चिन्हे",
    location: "स्थान",
    last_update: "शेवटचे अपडेट",
    contact_patient: "रुग्णाशी संपर्क",
    view_on_map: "नकाशावर पहा",
    alert_healthcare: "आरोग्य प्रदात्याला अलर्ट",
    status: StatusLabels {
        critical: "गंभीर",
        warning: "चेतावणी",
        stable: "स्थिर",
        recovered: "बरे झाले",
    },
};

// ── IoT monitoring ──────────────────────────────────────────────────────────

const IOT_EN: IotText = IotText {
    title: "IoT Device Monitoring",
    subtitle: "Real-time health device connectivity and data streaming",
    connected_devices: "Connected Devices",
    active_alerts: "Active Alerts",
    data_points: "Data Points/Hour",
    device_status: "Device Status",
    battery: "Battery",
    last_reading: "Last Reading",
    threshold: "Threshold",
    reconnect: "Reconnect",
    view_history: "View History",
    device_types: DeviceTypeLabels {
        smartwatch: "Smart Watch",
        thermometer: "Digital Thermometer",
        pulse_oximeter: "Pulse Oximeter",
        smartphone: "Smartphone App",
    },
};

const IOT_MR: IotText = IotText {
    title: "IoT डिव्हाइस मॉनिटरिंग",
    subtitle: "रिअल-टाइम आरोग्य डिव्हाइस कनेक्टिव्हिटी आणि डेटा स्ट्रीमिंग",
    connected_devices: "कनेक्ट केलेले डिव्हाइसेस",
    active_alerts: "सक्रिय अलर्ट",
    data_points: "डेटा पॉइंट्स/तास",
    device_status: "डिव्हाइस स्थिती",
    battery: "बॅटरी",
    last_reading: "शेवटचे रीडिंग",
    threshold: "मर्यादा",
    reconnect: "पुन्हा कनेक्ट करा",
    view_history: "इतिहास पहा",
    device_types: DeviceTypeLabels {
        smartwatch: "स्मार्ट वॉच",
        thermometer: "डिजिटल थर्मामीटर",
        pulse_oximeter: "पल्स ऑक्सिमीटर",
        smartphone: "स्मार्टफोन अॅप",
    },
};

// ── Charts ──────────────────────────────────────────────────────────────────

const CHARTS_EN: ChartsText = ChartsText {
    title: "COVID-19 Data Analytics Dashboard",
    subtitle: "Real-time insights and trends across Maharashtra",
    daily_trend: "Daily Cases Trend",
    district_wise: "District-wise Distribution",
    recovery_rate: "Recovery Analytics",
    cases: "New Cases",
    recovered: "Recovered",
    deaths: "Deaths",
};

const CHARTS_MR: ChartsText = ChartsText {
    title: "कोविड-19 डेटा अॅनालिटिक्स डॅशबोर्ड",
    subtitle: "महाराष्ट्रातील रिअल-टाइम अंतर्दृष्टी आणि ट्रेंड",
    daily_trend: "दैनिक केसेसचा ट्रेंड",
    district_wise: "जिल्हानिहाय वितरण",
    recovery_rate: "पुनर्प्राप्ती विश्लेषण",
    cases: "नवे केसेस",
    recovered: "बरे झालेले",
    deaths: "मृत्यू",
};

// ── Map ─────────────────────────────────────────────────────────────────────

const MAP_EN: MapText = MapText {
    title: "COVID Hotspot Tracking Map",
    subtitle: "Real-time visualization of suspected cases and containment zones",
    legend: MapLegend {
        critical: "Critical Cases",
        warning: "Warning Cases",
        stable: "Stable Cases",
        containment: "Containment Zones",
    },
};

const MAP_MR: MapText = MapText {
    title: "कोविड हॉटस्पॉट ट्रॅकिंग मॅप",
    subtitle: "संशयित प्रकरणे आणि नियंत्रण झोनचे रिअल-टाइम व्हिज्युअलायझेशन",
    legend: MapLegend {
        critical: "गंभीर प्रकरणे",
        warning: "चेतावणी प्रकरणे",
        stable: "स्थिर प्रकरणे",
        containment: "नियंत्रण झोन",
    },
};

// ── Report form ─────────────────────────────────────────────────────────────

const REPORTING_EN: ReportingText = ReportingText {
    title: "Report Suspected COVID Case",
    subtitle: "Help your community by reporting suspected cases for early intervention",
    form: FormLabels {
        name: "Full Name",
        phone: "Phone Number",
        district: "District",
        symptoms: "Symptoms (Check all that apply)",
        description: "Additional Details",
        submit: "Submit Report",
        emergency: "For Emergency: Call 104",
    },
    symptoms_list: &[
        "Fever",
        "Cough",
        "Shortness of breath",
        "Loss of taste/smell",
        "Body aches",
        "Headache",
        "Sore throat",
        "Fatigue",
    ],
    districts: &[
        "Mumbai",
        "Pune",
        "Nagpur",
        "Nashik",
        "Aurangabad",
        "Solapur",
        "Ahmednagar",
        "Kolhapur",
        "Sangli",
        "Satara",
        "Raigad",
        "Thane",
    ],
    quick_actions_title: "Quick Actions",
    quick_actions: &[
        QuickAction {
            title: "Emergency Helpline",
            subtitle: "Call 104 for immediate help",
            action: "Call Now",
        },
        QuickAction {
            title: "Find Testing Center",
            subtitle: "Locate nearest COVID testing facility",
            action: "Find Centers",
        },
        QuickAction {
            title: "Track Your Report",
            subtitle: "Check status of your submitted report",
            action: "Track Status",
        },
    ],
};

const REPORTING_MR: ReportingText = ReportingText {
    title: "संशयित कोविड केस नोंदवा",
    subtitle: "लवकर हस्तक्षेपासाठी संशयित प्रकरणे नोंदवून तुमच्या समुदायाला मदत करा",
    form: FormLabels {
        name: "पूर्ण नाव",
        phone: "फोन नंबर",
        district: "जिल्हा",
        symptoms: "लक्षणे (जे लागू आहेत ते सर्व निवडा)",
        description: "अतिरिक्त तपशील",
        submit: "अहवाल सबमिट करा",
        emergency: "आणीबाणीसाठी: 104 वर कॉल करा",
    },
    symptoms_list: &[
        "ताप",
        "खोकला",
        "श्वास घेण्यात त्रास",
        "चव/वास जाणे",
        "शरीर दुखणे",
        "डोकेदुखी",
        "घसा दुखणे",
        "थकवा",
    ],
    districts: &[
        "मुंबई",
        "पुणे",
        "नागपूर",
        "नाशिक",
        "औरंगाबाद",
        "सोलापूर",
        "अहमदनगर",
        "कोल्हापूर",
        "सांगली",
        "सातारा",
        "रायगड",
        "ठाणे",
    ],
    quick_actions_title: "जलद क्रिया",
    quick_actions: &[
        QuickAction {
            title: "आणीबाणी हेल्पलाइन",
            subtitle: "तत्काळ मदतीसाठी 104 वर कॉल करा",
            action: "आता कॉल करा",
        },
        QuickAction {
            title: "टेस्टिंग सेंटर शोधा",
            subtitle: "जवळचे कोविड टेस्टिंग सुविधा शोधा",
            action: "केंद्रे शोधा",
        },
        QuickAction {
            title: "तुमचा अहवाल ट्रॅक करा",
            subtitle: "तुमच्या सबमिट केलेल्या अहवालाची स्थिती तपासा",
            action: "स्थिती ट्रॅक करा",
        },
    ],
};

// ── Government data portals ─────────────────────────────────────────────────

const MOHFW_URL: &str = "https://covid19dashboard.mohfw.gov.in/";
const MYGOV_URL: &str = "https://www.mygov.in/covid-19/";
const AAROGYA_SETU_URL: &str = "https://www.aarogyasetu.gov.in/";
const MAHA_HEALTH_URL: &str = "https://arogya.maharashtra.gov.in/";

const GOVERNMENT_DATA_EN: GovernmentDataText = GovernmentDataText {
    title: "Official Government COVID-19 Data",
    subtitle: "Real-time data from Ministry of Health & Family Welfare",
    dashboard: "COVID-19 India Dashboard",
    dashboard_desc: "Access official statistics and trends from MOHFW",
    portals: "Government Portals",
    portal_list: &[
        Portal {
            name: "MOHFW COVID Dashboard",
            url: MOHFW_URL,
            desc: "Official COVID-19 statistics for India",
        },
        Portal {
            name: "MyGov Corona Helpdesk",
            url: MYGOV_URL,
            desc: "Government helpdesk and resources",
        },
        Portal {
            name: "Aarogya Setu",
            url: AAROGYA_SETU_URL,
            desc: "Contact tracing and health status",
        },
        Portal {
            name: "Maharashtra Health Dept",
            url: MAHA_HEALTH_URL,
            desc: "State health department portal",
        },
    ],
};

const GOVERNMENT_DATA_MR: GovernmentDataText = GovernmentDataText {
    title: "अधिकृत सरकारी कोविड-19 डेटा",
    subtitle: "आरोग्य आणि कुटुंब कल्याण मंत्रालयाकडून रिअल-टाइम डेटा",
    dashboard: "कोविड-19 भारत डॅशबोर्ड",
    dashboard_desc: "MOHFW कडून अधिकृत आकडेवारी आणि ट्रेंड पहा",
    portals: "सरकारी पोर्टल",
    portal_list: &[
        Portal {
            name: "MOHFW कोविड डॅशबोर्ड",
            url: MOHFW_URL,
            desc: "भारतासाठी अधिकृत कोविड-19 आकडेवारी",
        },
        Portal {
            name: "मायगव्ह कोरोना हेल्पडेस्क",
            url: MYGOV_URL,
            desc: "सरकारी हेल्पडेस्क आणि संसाधने",
        },
        Portal {
            name: "आरोग्य सेतू",
            url: AAROGYA_SETU_URL,
            desc: "संपर्क ट्रेसिंग आणि आरोग्य स्थिती",
        },
        Portal {
            name: "महाराष्ट्र आरोग्य विभाग",
            url: MAHA_HEALTH_URL,
            desc: "राज्य आरोग्य विभाग पोर्टल",
        },
    ],
};

// ── Guidelines ──────────────────────────────────────────────────────────────

const GUIDELINES_EN: GuidelinesText = GuidelinesText {
    title: "COVID-19 Guidelines & Protocols",
    subtitle: "Official guidelines from Central and State Government",
    central_gov: "Central Government Guidelines",
    state_gov: "Maharashtra State Guidelines",
    helpline: "Helpline Numbers",
    central_guidelines: &[
        Guideline {
            title: "COVID-19 Clinical Management Protocol",
            kind: "Medical Guidelines",
        },
        Guideline {
            title: "Home Isolation Guidelines",
            kind: "General Public",
        },
        Guideline {
            title: "Vaccination Guidelines",
            kind: "Immunization",
        },
        Guideline {
            title: "Travel & Transport Guidelines",
            kind: "Movement",
        },
    ],
    state_guidelines: &[
        Guideline {
            title: "Maharashtra COVID-19 SOP",
            kind: "State Protocol",
        },
        Guideline {
            title: "District-wise Containment Guidelines",
            kind: "Local Administration",
        },
        Guideline {
            title: "Educational Institution Guidelines",
            kind: "Schools & Colleges",
        },
        Guideline {
            title: "Business & Industry Guidelines",
            kind: "Commercial Activities",
        },
    ],
    helpline_numbers: &[
        Helpline {
            name: "National Helpline",
            number: "1075",
            available: "24x7",
        },
        Helpline {
            name: "Maharashtra Helpline",
            number: "020-26127394",
            available: "24x7",
        },
        Helpline {
            name: "Mental Health Helpline",
            number: "08046110007",
            available: "24x7",
        },
        Helpline {
            name: "Child Helpline",
            number: "1098",
            available: "24x7",
        },
    ],
};

const GUIDELINES_MR: GuidelinesText = GuidelinesText {
    title: "कोविड-19 मार्गदर्शक तत्त्वे आणि प्रोटोकॉल",
    subtitle: "केंद्र आणि राज्य सरकारकडून अधिकृत मार्गदर्शक तत्त्वे",
    central_gov: "केंद्र सरकारची मार्गदर्शक तत्त्वे",
    state_gov: "महाराष्ट्र राज्याची मार्गदर्शक तत्त्वे",
    helpline: "हेल्पलाइन नंबर",
    central_guidelines: &[
        Guideline {
            title: "कोविड-19 क्लिनिकल व्यवस्थापन प्रोटोकॉल",
            kind: "वैद्यकीय मार्गदर्शक तत्त्वे",
        },
        Guideline {
            title: "घरी अलगीकरण मार्गदर्शक तत्त्वे",
            kind: "सामान्य जनता",
        },
        Guideline {
            title: "लसीकरण मार्गदर्शक तत्त्वे",
            kind: "रोगप्रतिकारक",
        },
        Guideline {
            title: "प्रवास आणि वाहतूक मार्गदर्शक तत्त्वे",
            kind: "हालचाल",
        },
    ],
    state_guidelines: &[
        Guideline {
            title: "महाराष्ट्र कोविड-19 SOP",
            kind: "राज्य प्रोटोकॉल",
        },
        Guideline {
            title: "जिल्हानिहाय नियंत्रण मार्गदर्शक तत्त्वे",
            kind: "स्थानिक प्रशासन",
        },
        Guideline {
            title: "शैक्षणिक संस्था मार्गदर्शक तत्त्वे",
            kind: "शाळा आणि महाविद्यालये",
        },
        Guideline {
            title: "व्यवसाय आणि उद्योग मार्गदर्शक तत्त्वे",
            kind: "व्यावसायिक क्रियाकलाप",
        },
    ],
    helpline_numbers: &[
        Helpline {
            name: "राष्ट्रीय हेल्पलाइन",
            number: "1075",
            available: "24x7",
        },
        Helpline {
            name: "महाराष्ट्र हेल्पलाइन",
            number: "020-26127394",
            available: "24x7",
        },
        Helpline {
            name: "मानसिक आरोग्य हेल्पलाइन",
            number: "08046110007",
            available: "24x7",
        },
        Helpline {
            name: "बाल हेल्पलाइन",
            number: "1098",
            available: "24x7",
        },
    ],
};

// ── Government initiatives ──────────────────────────────────────────────────

const INITIATIVES_EN: InitiativesText = InitiativesText {
    title: "Government Initiatives & Schemes",
    subtitle: "Support programs for COVID-19 patients and affected families",
    initiatives: &[
        Initiative {
            title: "PM-CARES Fund",
            description: "Emergency relief fund for COVID-19 treatment and support for affected families",
            benefits: &[
                "Free treatment in government hospitals",
                "Financial assistance for families",
                "Medical equipment support",
            ],
        },
        Initiative {
            title: "Pradhan Mantri Garib Kalyan Yojana",
            description: "Comprehensive package for poor and vulnerable sections during COVID-19",
            benefits: &[
                "Free food grains for 3 months",
                "Direct cash transfer",
                "Free cooking gas cylinders",
            ],
        },
        Initiative {
            title: "Employment Support Schemes",
            description: "Job security and employment generation during pandemic",
            benefits: &[
                "MGNREGA job guarantee",
                "Skill development programs",
                "Self-employment opportunities",
            ],
        },
        Initiative {
            title: "Maharashtra State Schemes",
            description: "State-specific support programs for COVID-19 relief",
            benefits: &[
                "Mahatma Jyotiba Phule Jan Arogya Yojana",
                "State disaster relief fund",
                "Local employment schemes",
            ],
        },
    ],
};

const INITIATIVES_MR: InitiativesText = InitiativesText {
    title: "सरकारी उपक्रम आणि योजना",
    subtitle: "कोविड-19 रुग्ण आणि प्रभावित कुटुंबांसाठी सहाय्य कार्यक्रम",
    initiatives: &[
        Initiative {
            title: "पीएम-केअर्स फंड",
            description: "कोविड-19 उपचार आणि प्रभावित कुटुंबांसाठी आपत्कालीन मदत फंड",
            benefits: &[
                "सरकारी रुग्णालयात मोफत उपचार",
                "कुटुंबांसाठी आर्थिक सहाय्य",
                "वैद्यकीय उपकरणे सहाय्य",
            ],
        },
        Initiative {
            title: "प्रधानमंत्री गरीब कल्याण योजना",
            description: "कोविड-19 दरम्यान गरीब आणि असुरक्षित वर्गासाठी व्यापक पॅकेज",
            benefits: &[
                "3 महिन्यांसाठी मोफत अन्नधान्य",
                "थेट रोख हस्तांतरण",
                "मोफत स्वयंपाकाचे गॅस सिलिंडर",
            ],
        },
        Initiative {
            title: "रोजगार सहाय्य योजना",
            description: "साथीच्या आजारादरम्यान नोकरीची सुरक्षा आणि रोजगार निर्मिती",
            benefits: &[
                "मनरेगा नोकरीची हमी",
                "कौशल्य विकास कार्यक्रम",
                "स्वरोजगार संधी",
            ],
        },
        Initiative {
            title: "महाराष्ट्र राज्य योजना",
            description: "कोविड-19 मदतीसाठी राज्य-विशिष्ट सहाय्य कार्यक्रम",
            benefits: &[
                "महात्मा ज्योतिबा फुले जन आरोग्य योजना",
                "राज्य आपत्ती मदत फंड",
                "स्थानिक रोजगार योजना",
            ],
        },
    ],
};

// ── About ───────────────────────────────────────────────────────────────────

const ABOUT_EN: AboutText = AboutText {
    title: "About MahaRakshak",
    subtitle: "Born from necessity, built for Maharashtra",
    description: "In response to the recent surge of 154 new COVID-19 cases since 19th May 2025, as reported by the Ministry of Health and Family Welfare, MahaRakshak offers a focused solution for early detection and containment.",
    mission: "Our Mission",
    mission_text: "To prevent a repeat of the 2020 crisis by enabling community-level tracking and swift public health response across Maharashtra.",
    values: &[
        Value {
            title: "Protection First",
            description: "Your health and privacy are our top priorities in everything we build.",
        },
        Value {
            title: "Precision Tracking",
            description: "Hyperlocal focus on Maharashtra's unique geographical and demographic needs.",
        },
        Value {
            title: "Community Driven",
            description: "Empowering every citizen to contribute to collective health and safety.",
        },
        Value {
            title: "Rapid Response",
            description: "Real-time alerts and immediate action capabilities for health authorities.",
        },
    ],
    impact: TitledList {
        title: "Our Impact Goals",
        points: &[
            "Early detection of COVID-19 hotspots before they become critical",
            "Empowering health workers with actionable, localized data",
            "Building community awareness and proactive health behavior",
            "Supporting government decision-making with real-time insights",
        ],
    },
    commitment: "Our commitment to Maharashtra goes beyond technology — we're building a healthier, more resilient future for all.",
};

const ABOUT_MR: AboutText = AboutText {
    title: "महाराक्षकाबद्दल",
    subtitle: "गरजेतून जन्मलेले, महाराष्ट्रासाठी तयार केलेले",
    description: "19 मे 2025 पासून 154 नवीन कोविड-19 प्रकरणांच्या अलीकडील वाढीला प्रतिसाद म्हणून, आरोग्य आणि कुटुंब कल्याण मंत्रालयाने नोंदवल्याप्रमाणे, महाराक्षक लवकर शोध आणि प्रतिबंधासाठी एक केंद्रित समाधान देते.",
    mission: "आमचे ध्येय",
    mission_text: "महाराष्ट्रभर समुदाय-स्तरीय ट्रॅकिंग आणि जलद सार्वजनिक आरोग्य प्रतिसाद सक्षम करून 2020 च्या संकटाची पुनरावृत्ती टाळणे.",
    values: &[
        Value {
            title: "संरक्षण प्रथम",
            description: "आम्ही जे काही बांधतो त्यात तुमचे आरोग्य आणि गोपनीयता आमच्या सर्वोच्च प्राधान्यांपैकी आहेत.",
        },
        Value {
            title: "परिशुद्ध ट्रॅकिंग",
            description: "महाराष्ट्राच्या अनन्य भौगोलिक आणि लोकसंख्याशास्त्रीय गरजांवर अतिस्थानिक फोकस.",
        },
        Value {
            title: "समुदाय चालित",
            description: "सामूहिक आरोग्य आणि सुरक्षिततेसाठी योगदान देण्यासाठी प्रत्येक नागरिकास सक्षम करणे.",
        },
        Value {
            title: "जलद प्रतिसाद",
            description: "आरोग्य अधिकाऱ्यांसाठी रिअल-टाइम अलर्ट आणि त्वरित कृती क्षमता.",
        },
    ],
    impact: TitledList {
        title: "आमची प्रभाव उद्दिष्टे",
        points: &[
            "कोविड-19 हॉटस्पॉट्स गंभीर होण्यापूर्वी त्यांचा लवकर शोध",
            "आरोग्य कर्मचाऱ्यांना कृती-योग्य, स्थानिकीकृत डेटासह सक्षम करणे",
            "समुदायिक जागरूकता आणि सक्रिय आरोग्य वर्तन निर्माण करणे",
            "रिअल-टाइम अंतर्दृष्टीसह सरकारी निर्णय घेण्यास समर्थन करणे",
        ],
    },
    commitment: "महाराष्ट्राप्रति आमची बांधिलकी तंत्रज्ञानाच्या पलीकडे आहे — आम्ही सर्वांसाठी एक निरोगी, अधिक लवचिक भविष्य बांधत आहोत.",
};

// ── Footer ──────────────────────────────────────────────────────────────────

const FOOTER_EN: FooterText = FooterText {
    slogan: SLOGAN,
    description: "MahaRakshak is Maharashtra's first community-driven COVID-19 suspect tracking platform, built to protect and empower every citizen.",
    quick_links: TitledList {
        title: "Quick Links",
        points: &[
            "Dashboard",
            "Report Case",
            "Statistics",
            "Testing Centers",
            "Health Guidelines",
        ],
    },
    contact: FooterContact {
        title: "Contact Information",
        emergency: "Emergency Helpline: 104",
        support: "Support: 1800-XXX-XXXX",
        email: "info@maharakshak.gov.in",
        address: "Maharashtra Health Department, Mumbai",
    },
    legal: TitledList {
        title: "Legal",
        points: &[
            "Privacy Policy",
            "Terms of Service",
            "Data Protection",
            "Accessibility",
        ],
    },
    copyright: "2025 Government of Maharashtra. All rights reserved.",
    built_with: "Built with ❤️ for Maharashtra",
};

const FOOTER_MR: FooterText = FooterText {
    slogan: SLOGAN,
    description: "महाराक्षक हा महाराष्ट्राचा पहिला समुदाय-चालित कोविड-19 संशयित ट्रॅकिंग प्लॅटफॉर्म आहे, जो प्रत्येक नागरिकाचे संरक्षण आणि सक्षमीकरण करण्यासाठी तयार केला गेला आहे.",
    quick_links: TitledList {
        title: "द्रुत दुवे",
        points: &[
            "डॅशबोर्ड",
            "केस नोंदवा",
            "आकडेवारी",
            "टेस्टिंग सेंटर्स",
            "आरोग्य मार्गदर्शक तत्त्वे",
        ],
    },
    contact: FooterContact {
        title: "संपर्क माहिती",
        emergency: "आणीबाणी हेल्पलाइन: 104",
        support: "समर्थन: 1800-XXX-XXXX",
        email: "info@maharakshak.gov.in",
        address: "महाराष्ट्र आरोग्य विभाग, मुंबई",
    },
    legal: TitledList {
        title: "कायदेशीर",
        points: &[
            "गोपनीयता धोरण",
            "सेवा अटी",
            "डेटा संरक्षण",
            "प्रवेशयोग्यता",
        ],
    },
    copyright: "2025 महाराष्ट्र सरकार. सर्व हक्क राखीव.",
    built_with: "महाराष्ट्रासाठी ❤️ ने तयार केले",
};

// ── Lookups ─────────────────────────────────────────────────────────────────

macro_rules! by_language {
    ($($name:ident -> $ty:ty = ($en:ident, $mr:ident);)*) => {
        $(
            pub fn $name(lang: Language) -> $ty {
                match lang {
                    Language::En => $en,
                    Language::Mr => $mr,
                }
            }
        )*
    };
}

by_language! {
    header -> HeaderText = (HEADER_EN, HEADER_MR);
    hero -> HeroText = (HERO_EN, HERO_MR);
    stats -> StatsText = (STATS_EN, STATS_MR);
    features -> FeaturesText = (FEATURES_EN, FEATURES_MR);
    dashboard -> DashboardText = (DASHBOARD_EN, DASHBOARD_MR);
    iot -> IotText = (IOT_EN, IOT_MR);
    charts -> ChartsText = (CHARTS_EN, CHARTS_MR);
    map -> MapText = (MAP_EN, MAP_MR);
    reporting -> ReportingText = (REPORTING_EN, REPORTING_MR);
    government_data -> GovernmentDataText = (GOVERNMENT_DATA_EN, GOVERNMENT_DATA_MR);
    guidelines -> GuidelinesText = (GUIDELINES_EN, GUIDELINES_MR);
    initiatives -> InitiativesText = (INITIATIVES_EN, INITIATIVES_MR);
    about -> AboutText = (ABOUT_EN, ABOUT_MR);
    footer -> FooterText = (FOOTER_EN, FOOTER_MR);
}
