use common::config::FormOptions;
use common::debounce::Ticket;
use common::form::{FieldEdit, TextField};
use common::model::address::Address;
use common::model::customer::NotificationChannel;
use common::screen::CustomerScreen;
use log::LevelFilter;

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Debug)
        .try_init();
}

/// One-shot timers as a browser would run them: each armed ticket fires
/// `window` ms after it was armed, in arming order.
struct Timers {
    window: f64,
    armed: Vec<(f64, Ticket)>,
}

impl Timers {
    fn new(screen: &CustomerScreen) -> Self {
        Self {
            window: f64::from(screen.debounce_window_ms()),
            armed: Vec::new(),
        }
    }

    fn type_email(&mut self, screen: &mut CustomerScreen, value: &str, at: f64) {
        if let Some(ticket) = screen
            .apply(FieldEdit::Text(TextField::Email, value.to_string()))
            .unwrap()
        {
            self.armed.push((at + self.window, ticket));
        }
    }

    /// Runs every timer due by `now`; returns how many recomputed the message.
    fn advance_to(&mut self, screen: &mut CustomerScreen, now: f64) -> usize {
        let (due, later): (Vec<_>, Vec<_>) =
            self.armed.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.armed = later;
        due.into_iter()
            .filter(|(_, ticket)| screen.settle(*ticket))
            .count()
    }
}

#[test]
fn burst_of_keystrokes_recomputes_message_once() {
    init_logging();
    let mut screen = CustomerScreen::default();
    let mut timers = Timers::new(&screen);

    let mut clock = 0.0;
    let mut computations = 0;
    for prefix in ["j", "ja", "jac", "jack@"] {
        clock += 400.0;
        timers.type_email(&mut screen, prefix, clock);
        computations += timers.advance_to(&mut screen, clock + 399.0);
    }
    assert_eq!(screen.email_message(), "");

    computations += timers.advance_to(&mut screen, clock + 999.0);
    assert_eq!(computations, 0);

    computations += timers.advance_to(&mut screen, clock + 1000.0);
    computations += timers.advance_to(&mut screen, clock + 5000.0);
    assert_eq!(computations, 1);
    assert_eq!(screen.email_message(), "Please enter a valid email address");
}

#[test]
fn stale_timer_callbacks_are_ignored() {
    init_logging();
    let mut screen = CustomerScreen::default();
    let first = screen
        .apply(FieldEdit::Text(TextField::Email, "jack@".to_string()))
        .unwrap()
        .unwrap();
    let last = screen
        .apply(FieldEdit::Text(TextField::Email, "jack@torchwood.com".to_string()))
        .unwrap()
        .unwrap();

    assert!(!screen.settle(first));
    assert_eq!(screen.email_message(), "");
    assert!(screen.settle(last));
    assert_eq!(screen.email_message(), "");
}

#[test]
fn cleared_email_asks_for_an_address() {
    init_logging();
    let mut screen = CustomerScreen::default();
    let mut timers = Timers::new(&screen);
    timers.type_email(&mut screen, "j", 0.0);
    timers.type_email(&mut screen, "", 100.0);
    assert_eq!(timers.advance_to(&mut screen, 1100.0), 1);
    assert_eq!(screen.email_message(), "Please enter your email address");
}

#[test]
fn email_confirmation_mismatch() {
    init_logging();
    let mut screen = CustomerScreen::default();
    screen
        .apply(FieldEdit::Text(TextField::Email, "jack@torchwood.com".to_string()))
        .unwrap();
    assert!(screen.form().email_group().errors().is_empty());

    screen
        .apply(FieldEdit::Text(TextField::ConfirmEmail, "jack@torchwood.co".to_string()))
        .unwrap();
    assert!(screen.form().email_group().errors().contains("match"));

    screen
        .apply(FieldEdit::Text(TextField::ConfirmEmail, "jack@torchwood.com".to_string()))
        .unwrap();
    assert!(screen.form().email_group().errors().is_empty());
}

#[test]
fn rating_inputs() {
    init_logging();
    let mut screen = CustomerScreen::default();
    let cases = [
        ("", true),
        ("1", true),
        ("5", true),
        ("0", false),
        ("6", false),
        ("great", false),
    ];
    for (raw, valid) in cases {
        screen.apply(FieldEdit::Rating(raw.to_string())).unwrap();
        assert_eq!(screen.form().rating().is_valid(), valid, "{raw:?}");
        if !valid {
            assert!(screen.form().rating().errors().contains("range"));
        }
    }
}

#[test]
fn configured_rating_bounds_apply() {
    init_logging();
    let options: FormOptions = serde_json::from_str(r#"{"rating":{"min":0,"max":10}}"#).unwrap();
    let mut screen = CustomerScreen::new(&options);
    screen.apply(FieldEdit::Rating("9".to_string())).unwrap();
    assert!(screen.form().rating().is_valid());
}

#[test]
fn notification_channel_round_trip() {
    init_logging();
    let mut screen = CustomerScreen::default();
    screen
        .apply(FieldEdit::Text(TextField::Email, "bad".to_string()))
        .unwrap();
    assert!(!screen.form().email().is_valid());
    assert!(screen.form().phone().is_valid());

    screen
        .apply(FieldEdit::Notifications(NotificationChannel::Text))
        .unwrap();
    assert!(screen.form().email().is_valid());
    assert!(screen.form().phone().errors().contains("required"));

    screen
        .apply(FieldEdit::Phone("555-0100".to_string()))
        .unwrap();
    assert!(screen.form().phone().is_valid());

    screen
        .apply(FieldEdit::Notifications(NotificationChannel::Email))
        .unwrap();
    assert!(screen.form().phone().is_valid());
    assert!(screen.form().email().errors().contains("email"));
}

#[test]
fn add_address_grows_by_one_default_entry() {
    init_logging();
    let mut screen = CustomerScreen::default();
    for expected in 2..=4 {
        screen.add_address();
        let addresses = screen.form().addresses();
        assert_eq!(addresses.len(), expected);
        assert_eq!(addresses.last().map(|a| a.value()), Some(Address::default()));
    }
}

#[test]
fn save_is_logged() {
    init_logging();
    assert!(log::log_enabled!(log::Level::Info));
    assert!(CustomerScreen::default().save().is_ok());
}

#[test]
fn untouched_phone_saves_as_null() {
    init_logging();
    let saved: serde_json::Value =
        serde_json::from_str(&CustomerScreen::default().save().unwrap()).unwrap();
    assert!(saved["phone"].is_null());
}

#[test]
fn test_data_then_save() {
    init_logging();
    let mut screen = CustomerScreen::default();
    screen
        .apply(FieldEdit::Phone("555-0100".to_string()))
        .unwrap();
    screen.populate_test_data();

    let saved: serde_json::Value = serde_json::from_str(&screen.save().unwrap()).unwrap();
    assert_eq!(saved["firstName"], "Tatiana");
    assert_eq!(saved["lastName"], "Shapovalova");
    assert_eq!(saved["phone"], "555-0100");
    assert_eq!(saved["notifications"], "email");
    assert_eq!(saved["addresses"].as_array().map(Vec::len), Some(1));
}
