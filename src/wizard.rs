// src/wizard.rs — Schedule wizard state
//
// Six linear steps over a single BookingRequest. Lives in a Yew reducer so async
// completions (vPIC lookups, geolocation) always land on the latest state; every
// completion carries the ticket it was issued with and is dropped if that ticket
// is no longer current.

use std::rc::Rc;

use thiserror::Error;
use yew::functional::Reducible;

use crate::booking::{BookingRequest, Coordinates, ServiceType, TimingMode, VehicleType};
use crate::locate::LocateError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    #[default]
    Service = 1,
    Vehicle = 2,
    Location = 3,
    Timing = 4,
    Estimate = 5,
    Confirm = 6,
}

impl Step {
    pub const COUNT: u8 = 6;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::Service),
            2 => Some(Step::Vehicle),
            3 => Some(Step::Location),
            4 => Some(Step::Timing),
            5 => Some(Step::Estimate),
            6 => Some(Step::Confirm),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Service => "Select Service",
            Step::Vehicle => "Vehicle Details",
            Step::Location => "Pickup Location",
            Step::Timing => "When?",
            Step::Estimate => "Estimate",
            Step::Confirm => "Book now",
        }
    }
}

// ---------- async lookup bookkeeping ----------

/// Identifies one issued lookup. `key` is the input the lookup was made for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub key: String,
}

/// A dropdown's option set plus the lookup currently allowed to fill it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionList {
    items: Vec<String>,
    generation: u64,
    pending: Option<String>,
}

impl OptionList {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The lookup that still needs to run, if any.
    pub fn pending(&self) -> Option<LookupTicket> {
        self.pending.as_ref().map(|key| LookupTicket {
            generation: self.generation,
            key: key.clone(),
        })
    }

    /// Empties the list and issues a fresh ticket; anything issued before is now stale.
    pub fn begin(&mut self, key: impl Into<String>) -> LookupTicket {
        self.generation += 1;
        self.items.clear();
        let key = key.into();
        self.pending = Some(key.clone());
        LookupTicket {
            generation: self.generation,
            key,
        }
    }

    /// Empties the list with nothing outstanding.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.pending = None;
    }

    /// Applies a finished lookup. Returns false (and changes nothing) when stale.
    pub fn resolve(&mut self, ticket: &LookupTicket, items: Vec<String>) -> bool {
        let current = self.generation == ticket.generation
            && self.pending.as_deref() == Some(ticket.key.as_str());
        if current {
            self.items = items;
            self.pending = None;
        }
        current
    }
}

// ---------- outcomes ----------

#[derive(Clone, Debug, PartialEq)]
pub struct BookingConfirmation {
    pub request: BookingRequest,
}

impl BookingConfirmation {
    pub fn headline(&self) -> String {
        format!(
            "{} for {} — {}",
            self.request.service.label(),
            self.request.vehicle.summary(),
            self.request.timing.summary()
        )
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfirmError {
    #[error("a booking can only be confirmed from step 6 (currently on step {})", .0.number())]
    NotReady(Step),
}

// ---------- wizard ----------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    step: Step,
    pub request: BookingRequest,
    pub makes: OptionList,
    pub models: OptionList,
    locate_seq: u64,
    locating: Option<u64>,
    pub locate_error: Option<LocateError>,
    pub confirmation: Option<BookingConfirmation>,
    pub confirm_error: Option<ConfirmError>,
}

impl Wizard {
    /// Fresh session at step 1 with the makes lookup for the default type queued.
    pub fn new() -> Self {
        let mut w = Self::default();
        w.makes.begin(w.request.vehicle.kind.key());
        w
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn go_to(&mut self, step: Step) {
        self.step = step;
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Service | Step::Location | Step::Estimate => true,
            Step::Vehicle => self.request.vehicle.is_complete(),
            Step::Timing => self.request.timing.is_complete(),
            Step::Confirm => false,
        }
    }

    /// Moves forward one step when the current step is complete; otherwise a no-op.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.go_to(prev);
        }
    }

    pub fn select_service(&mut self, service: ServiceType) {
        self.request.service = service;
    }

    pub fn select_vehicle_type(&mut self, kind: VehicleType) {
        if self.request.vehicle.kind == kind {
            return;
        }
        let v = &mut self.request.vehicle;
        v.kind = kind;
        v.make.clear();
        v.model.clear();
        self.models.reset();
        self.makes.begin(kind.key());
    }

    pub fn select_make(&mut self, make: String) {
        if self.request.vehicle.make == make {
            return;
        }
        self.request.vehicle.model.clear();
        if make.is_empty() {
            self.models.reset();
        } else {
            self.models.begin(make.clone());
        }
        self.request.vehicle.make = make;
    }

    pub fn select_model(&mut self, model: String) {
        self.request.vehicle.model = model;
    }

    pub fn select_year(&mut self, year: String) {
        self.request.vehicle.year = year;
    }

    pub fn makes_loaded(&mut self, ticket: &LookupTicket, makes: Vec<String>) -> bool {
        self.makes.resolve(ticket, makes)
    }

    pub fn models_loaded(&mut self, ticket: &LookupTicket, models: Vec<String>) -> bool {
        self.models.resolve(ticket, models)
    }

    pub fn set_address(&mut self, address: String) {
        self.request.location.address = address;
    }

    pub fn is_locating(&self) -> bool {
        self.locating.is_some()
    }

    /// Geolocation request that still needs to run, if any.
    pub fn pending_locate(&self) -> Option<u64> {
        self.locating
    }

    /// Queues a device-location request. A newer call supersedes one still in flight,
    /// which is also the way out of a prompt the browser never answers.
    pub fn begin_locate(&mut self) -> u64 {
        self.locate_seq += 1;
        self.locating = Some(self.locate_seq);
        self.locate_error = None;
        self.locate_seq
    }

    pub fn located(&mut self, ticket: u64, outcome: Result<Coordinates, LocateError>) -> bool {
        if self.locating != Some(ticket) {
            return false;
        }
        self.locating = None;
        match outcome {
            Ok(c) => self.request.location.coordinates = Some(c),
            Err(e) => self.locate_error = Some(e),
        }
        true
    }

    pub fn dismiss_locate_error(&mut self) {
        self.locate_error = None;
    }

    pub fn set_timing_mode(&mut self, mode: TimingMode) {
        self.request.timing.mode = mode;
    }

    pub fn set_date(&mut self, date: String) {
        self.request.timing.date = date;
    }

    pub fn set_time(&mut self, time: String) {
        self.request.timing.time = time;
    }

    /// Terminal step. No network call; the UI shows the returned confirmation.
    pub fn confirm(&mut self) -> Result<BookingConfirmation, ConfirmError> {
        if self.step != Step::Confirm {
            let err = ConfirmError::NotReady(self.step);
            self.confirm_error = Some(err.clone());
            return Err(err);
        }
        let done = BookingConfirmation {
            request: self.request.clone(),
        };
        self.confirm_error = None;
        self.confirmation = Some(done.clone());
        Ok(done)
    }
}

pub enum WizardAction {
    GoTo(Step),
    Advance,
    Back,
    SelectService(ServiceType),
    SelectVehicleType(VehicleType),
    SelectMake(String),
    SelectModel(String),
    SelectYear(String),
    MakesLoaded(LookupTicket, Vec<String>),
    ModelsLoaded(LookupTicket, Vec<String>),
    SetAddress(String),
    BeginLocate,
    Located(u64, Result<Coordinates, LocateError>),
    DismissLocateError,
    SetTimingMode(TimingMode),
    SetDate(String),
    SetTime(String),
    Confirm,
}

impl Reducible for Wizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::GoTo(step) => next.go_to(step),
            WizardAction::Advance => {
                next.advance();
            }
            WizardAction::Back => next.back(),
            WizardAction::SelectService(s) => next.select_service(s),
            WizardAction::SelectVehicleType(t) => next.select_vehicle_type(t),
            WizardAction::SelectMake(m) => next.select_make(m),
            WizardAction::SelectModel(m) => next.select_model(m),
            WizardAction::SelectYear(y) => next.select_year(y),
            WizardAction::MakesLoaded(ticket, makes) => {
                if !next.makes_loaded(&ticket, makes) {
                    return self;
                }
            }
            WizardAction::ModelsLoaded(ticket, models) => {
                if !next.models_loaded(&ticket, models) {
                    return self;
                }
            }
            WizardAction::SetAddress(a) => next.set_address(a),
            WizardAction::BeginLocate => {
                next.begin_locate();
            }
            WizardAction::Located(ticket, outcome) => {
                if !next.located(ticket, outcome) {
                    return self;
                }
            }
            WizardAction::DismissLocateError => next.dismiss_locate_error(),
            WizardAction::SetTimingMode(m) => next.set_timing_mode(m),
            WizardAction::SetDate(d) => next.set_date(d),
            WizardAction::SetTime(t) => next.set_time(t),
            // a rejected confirm is kept in `confirm_error` for the UI
            WizardAction::Confirm => {
                let _ = next.confirm();
            }
        }
        Rc::new(next)
    }
}
