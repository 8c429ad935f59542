use super::model::{
    BloodPressure, DeviceStatus, DeviceType, IoTDevice, Location, Patient, PatientStatus, Reading,
    Thresholds, Vitals,
};

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    (lat, lng): (f64, f64),
    (temperature, heart_rate, oxygen_saturation): (f64, i32, f64),
    (systolic, diastolic): (u16, u16),
    status: PatientStatus,
    last_update: &str,
    phone: &str,
    address: &str,
) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        location: Location { lat, lng },
        vitals: Vitals {
            temperature,
            heart_rate,
            oxygen_saturation,
            blood_pressure: BloodPressure {
                systolic,
                diastolic,
            },
        },
        status,
        last_update: last_update.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn device(
    id: &str,
    (patient_id, patient_name): (&str, &str),
    device_type: DeviceType,
    status: DeviceStatus,
    battery_level: f64,
    (timestamp, value, unit): (&str, f64, &str),
    (min, max): (f64, f64),
) -> IoTDevice {
    IoTDevice {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        patient_name: patient_name.to_string(),
        device_type,
        status,
        battery_level,
        last_reading: Reading {
            timestamp: timestamp.to_string(),
            value,
            unit: unit.to_string(),
        },
        thresholds: Thresholds { min, max },
    }
}

/// Patients shown on the tracking dashboard at startup
pub fn seed_patients() -> Vec<Patient> {
    vec![
        patient(
            "1",
            "Rajesh Sharma",
            (19.0760, 72.8777),
            (101.2, 95, 94.0),
            (140, 90),
            PatientStatus::Warning,
            "2 mins ago",
            "+91 9876543210",
            "Bandra, Mumbai",
        ),
        patient(
            "2",
            "Priya Patel",
            (18.5204, 73.8567),
            (103.5, 110, 89.0),
            (160, 95),
            PatientStatus::Critical,
            "1 min ago",
            "+91 9876543211",
            "Pune, Maharashtra",
        ),
        patient(
            "3",
            "Amit Deshmukh",
            (21.1458, 79.0882),
            (98.6, 72, 98.0),
            (120, 80),
            PatientStatus::Stable,
            "5 mins ago",
            "+91 9876543212",
            "Nagpur, Maharashtra",
        ),
    ]
}

/// Devices shown on the IoT monitoring panel at startup
pub fn seed_devices() -> Vec<IoTDevice> {
    vec![
        device(
            "dev001",
            ("pat001", "Rajesh Sharma"),
            DeviceType::Smartwatch,
            DeviceStatus::Online,
            85.0,
            ("2 mins ago", 95.0, "bpm"),
            (60.0, 100.0),
        ),
        device(
            "dev002",
            ("pat001", "Rajesh Sharma"),
            DeviceType::Thermometer,
            DeviceStatus::Warning,
            25.0,
            ("1 min ago", 101.2, "°F"),
            (97.0, 99.0),
        ),
        device(
            "dev003",
            ("pat002", "Priya Patel"),
            DeviceType::PulseOximeter,
            DeviceStatus::Online,
            92.0,
            ("30 secs ago", 89.0, "%"),
            (95.0, 100.0),
        ),
        device(
            "dev004",
            ("pat003", "Amit Deshmukh"),
            DeviceType::Smartphone,
            DeviceStatus::Offline,
            0.0,
            ("15 mins ago", 98.6, "°F"),
            (97.0, 99.0),
        ),
    ]
}
