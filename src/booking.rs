// src/booking.rs — the in-progress service request collected by the Schedule wizard

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceType {
    #[default]
    Tow,
    JumpStart,
    TireChange,
    Lockout,
    FuelDelivery,
    WinchOut,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Tow,
        ServiceType::JumpStart,
        ServiceType::TireChange,
        ServiceType::Lockout,
        ServiceType::FuelDelivery,
        ServiceType::WinchOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Tow => "Tow",
            ServiceType::JumpStart => "Jump Start",
            ServiceType::TireChange => "Tire Change",
            ServiceType::Lockout => "Lockout",
            ServiceType::FuelDelivery => "Fuel Delivery",
            ServiceType::WinchOut => "Winch-Out",
        }
    }

    pub fn from_label(s: &str) -> Option<ServiceType> {
        Self::ALL.into_iter().find(|t| t.label() == s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VehicleType {
    #[default]
    Car,
    Truck,
    Mpv,
    Motorcycle,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Car,
        VehicleType::Truck,
        VehicleType::Mpv,
        VehicleType::Motorcycle,
    ];

    /// Path segment understood by the vPIC `GetMakesForVehicleType` endpoint.
    pub fn key(self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Truck => "truck",
            VehicleType::Mpv => "mpv",
            VehicleType::Motorcycle => "motorcycle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
            VehicleType::Mpv => "MPV",
            VehicleType::Motorcycle => "Motorcycle",
        }
    }

    pub fn from_key(s: &str) -> Option<VehicleType> {
        Self::ALL.into_iter().find(|t| t.key() == s)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vehicle {
    pub kind: VehicleType,
    pub make: String,
    pub model: String,
    pub year: String,
}

impl Vehicle {
    pub fn is_complete(&self) -> bool {
        !self.make.is_empty() && !self.model.is_empty() && !self.year.is_empty()
    }

    /// "2020 Ford F-150", or "—" when nothing has been picked.
    pub fn summary(&self) -> String {
        let year = if self.year.is_empty() { "—" } else { self.year.as_str() };
        [year, self.make.as_str(), self.model.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

impl Location {
    pub fn maps_link(&self) -> Option<String> {
        self.coordinates.map(maps_link)
    }

    pub fn gps_label(&self) -> String {
        match self.coordinates {
            Some(c) => format!("{:.5}, {:.5}", c.latitude, c.longitude),
            None => "—".to_string(),
        }
    }
}

/// Deep link into Google Maps for a pin.
pub fn maps_link(c: Coordinates) -> String {
    format!("https://maps.google.com/?q={},{}", c.latitude, c.longitude)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimingMode {
    #[default]
    Asap,
    Scheduled,
}

impl TimingMode {
    pub fn key(self) -> &'static str {
        match self {
            TimingMode::Asap => "ASAP",
            TimingMode::Scheduled => "SCHEDULED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimingMode::Asap => "ASAP",
            TimingMode::Scheduled => "Schedule for later",
        }
    }

    pub fn from_key(s: &str) -> Option<TimingMode> {
        match s {
            "ASAP" => Some(TimingMode::Asap),
            "SCHEDULED" => Some(TimingMode::Scheduled),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timing {
    pub mode: TimingMode,
    pub date: String, // yyyy-mm-dd
    pub time: String, // HH:MM
}

impl Timing {
    pub fn is_complete(&self) -> bool {
        match self.mode {
            TimingMode::Asap => true,
            TimingMode::Scheduled => !self.date.is_empty() && !self.time.is_empty(),
        }
    }

    pub fn summary(&self) -> String {
        match self.mode {
            TimingMode::Asap => "ASAP".to_string(),
            TimingMode::Scheduled => format!("{} {}", self.date, self.time),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingRequest {
    pub service: ServiceType,
    pub vehicle: Vehicle,
    pub location: Location,
    pub timing: Timing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_link_uses_plain_number_formatting() {
        let link = maps_link(Coordinates::new(39.5, -98.35));
        assert_eq!(link, "https://maps.google.com/?q=39.5,-98.35");
    }

    #[test]
    fn maps_link_absent_without_coordinates() {
        let mut loc = Location {
            address: "123 Main St".into(),
            coordinates: None,
        };
        assert_eq!(loc.maps_link(), None);

        // zero is a real coordinate, not "missing"
        loc.coordinates = Some(Coordinates::new(0.0, 0.0));
        assert_eq!(loc.maps_link().as_deref(), Some("https://maps.google.com/?q=0,0"));
    }

    #[test]
    fn gps_label_rounds_to_five_places() {
        let loc = Location {
            address: String::new(),
            coordinates: Some(Coordinates::new(30.2672001, -97.7430608)),
        };
        assert_eq!(loc.gps_label(), "30.26720, -97.74306");
        assert_eq!(Location::default().gps_label(), "—");
    }

    #[test]
    fn vehicle_summary_skips_blank_parts() {
        let mut v = Vehicle::default();
        assert_eq!(v.summary(), "—");
        v.make = "FORD".into();
        assert_eq!(v.summary(), "— FORD");
        v.model = "F-150".into();
        v.year = "2020".into();
        assert_eq!(v.summary(), "2020 FORD F-150");
        assert!(v.is_complete());
    }

    #[test]
    fn scheduled_timing_needs_date_and_time() {
        let mut t = Timing {
            mode: TimingMode::Scheduled,
            ..Timing::default()
        };
        assert!(!t.is_complete());
        t.date = "2025-01-01".into();
        assert!(!t.is_complete());
        t.time = "09:00".into();
        assert!(t.is_complete());
        assert_eq!(t.summary(), "2025-01-01 09:00");
        assert_eq!(Timing::default().summary(), "ASAP");
    }

    #[test]
    fn keys_and_labels_round_trip_through_lookups() {
        assert_eq!(VehicleType::from_key("mpv"), Some(VehicleType::Mpv));
        assert_eq!(VehicleType::from_key("bus"), None);
        assert_eq!(ServiceType::from_label("Winch-Out"), Some(ServiceType::WinchOut));
        assert_eq!(TimingMode::from_key("SCHEDULED"), Some(TimingMode::Scheduled));
        assert_eq!(ServiceType::default(), ServiceType::Tow);
    }
}
