//! Purchase-flow state machine driving the storefront form.
//!
//! The form is disabled while a request is in flight, shows a short
//! countdown after a successful purchase and then sends the buyer to the
//! payment page.

/// Seconds between a successful purchase and the payment redirect.
pub const REDIRECT_COUNTDOWN_SECS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    Submitting,
    Success { countdown: u8, payment_url: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    Submit,
    Succeeded { payment_url: String },
    Failed { message: String },
    /// One second elapsed.
    Tick,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SendRequest,
    Redirect(String),
}

impl CheckoutState {
    pub fn can_submit(&self) -> bool {
        matches!(self, CheckoutState::Idle | CheckoutState::Error { .. })
    }

    pub fn next(self, event: CheckoutEvent) -> (CheckoutState, Effect) {
        use CheckoutEvent as Ev;
        use CheckoutState as St;

        match (self, event) {
            (state, Ev::Submit) if state.can_submit() => (St::Submitting, Effect::SendRequest),
            (St::Submitting, Ev::Succeeded { payment_url }) => (
                St::Success {
                    countdown: REDIRECT_COUNTDOWN_SECS,
                    payment_url,
                },
                Effect::None,
            ),
            (St::Submitting, Ev::Failed { message }) => (St::Error { message }, Effect::None),
            (St::Success { countdown, payment_url }, Ev::Tick) if countdown <= 1 => {
                (St::Idle, Effect::Redirect(payment_url))
            }
            (St::Success { countdown, payment_url }, Ev::Tick) => (
                St::Success {
                    countdown: countdown - 1,
                    payment_url,
                },
                Effect::None,
            ),
            (St::Error { .. }, Ev::Dismiss) => (St::Idle, Effect::None),
            (state, _) => (state, Effect::None),
        }
    }
}
