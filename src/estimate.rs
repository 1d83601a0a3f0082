// src/estimate.rs — flat-fee estimate shown on step 5

use crate::booking::BookingRequest;

/// Money in cents. Keeps the arithmetic exact; formatting happens at the edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u32);

impl Cents {
    pub fn dollars(self) -> String {
        format!("${}.{:02}", self.0 / 100, self.0 % 100)
    }

    /// "$85" for whole amounts, used in marketing copy.
    pub fn dollars_short(self) -> String {
        if self.0 % 100 == 0 {
            format!("${}", self.0 / 100)
        } else {
            self.dollars()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pricing {
    pub base_fee: Cents,
    pub included_miles: u32,
    pub per_mile: Cents,
    pub after_hours_fee: Cents,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_fee: Cents(8_500),
            included_miles: 7,
            per_mile: Cents(400),
            after_hours_fee: Cents(2_000),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub service: &'static str,
    pub vehicle: String,
    pub when: String,
    pub gps: String,
    pub base_fee: Cents,
    pub included_miles: u32,
    pub per_mile: Cents,
    pub total: Cents,
}

impl Estimate {
    /// Nothing in the request carries a distance or a time of day, so mileage and the
    /// after-hours surcharge never apply and `total` is the base fee.
    pub fn for_request(req: &BookingRequest, pricing: &Pricing) -> Self {
        Self {
            service: req.service.label(),
            vehicle: req.vehicle.summary(),
            when: req.timing.summary(),
            gps: req.location.gps_label(),
            base_fee: pricing.base_fee,
            included_miles: pricing.included_miles,
            per_mile: pricing.per_mile,
            total: pricing.base_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{Coordinates, ServiceType, TimingMode, VehicleType};

    #[test]
    fn formats_cents() {
        assert_eq!(Cents(8_500).dollars(), "$85.00");
        assert_eq!(Cents(405).dollars(), "$4.05");
        assert_eq!(Cents(2_000).dollars_short(), "$20");
        assert_eq!(Cents(1_999).dollars_short(), "$19.99");
    }

    #[test]
    fn total_is_always_the_base_fee() {
        let pricing = Pricing::default();
        let mut req = BookingRequest::default();
        assert_eq!(Estimate::for_request(&req, &pricing).total, Cents(8_500));

        req.service = ServiceType::WinchOut;
        req.vehicle.kind = VehicleType::Truck;
        req.vehicle.make = "KENWORTH".into();
        req.vehicle.model = "T680".into();
        req.vehicle.year = "2019".into();
        req.timing.mode = TimingMode::Scheduled;
        req.timing.date = "2025-01-01".into();
        req.timing.time = "23:30".into();
        req.location.coordinates = Some(Coordinates::new(45.0, -120.0));

        let est = Estimate::for_request(&req, &pricing);
        assert_eq!(est.total, pricing.base_fee);
        assert_eq!(est.total.dollars(), "$85.00");
        assert_eq!(est.service, "Winch-Out");
        assert_eq!(est.vehicle, "2019 KENWORTH T680");
        assert_eq!(est.when, "2025-01-01 23:30");
        assert_eq!(est.gps, "45.00000, -120.00000");
    }

    #[test]
    fn reports_pricing_terms() {
        let est = Estimate::for_request(&BookingRequest::default(), &Pricing::default());
        assert_eq!(est.included_miles, 7);
        assert_eq!(est.per_mile.dollars(), "$4.00");
        assert_eq!(est.when, "ASAP");
        assert_eq!(est.gps, "—");
    }
}
