//! The purchase prompt revealed once a reader scrolls far enough into a
//! rendered book.
//!
//! This module is independent of the sectioning pipeline. It models the
//! prompt's state and timing so the page glue only has to forward scroll
//! notifications and act on the returned decisions. Time is always supplied by
//! the caller.

use super::*;

/// Minimum spacing between two scroll evaluations.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(100);

/// True once the target's top edge has entered the viewport's bottom edge.
#[must_use]
pub fn should_reveal(
  current_scroll_offset: f64,
  viewport_height: f64,
  target_element_offset: f64,
) -> bool {
  target_element_offset <= current_scroll_offset + viewport_height
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
  pub offset: f64,
  pub target_offset: f64,
  pub viewport_height: f64,
}

impl ScrollPosition {
  #[must_use]
  pub fn should_reveal(&self) -> bool {
    should_reveal(self.offset, self.viewport_height, self.target_offset)
  }
}

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
  #[default]
  Hidden,
  Shown,
}

/// Admits at most one call per interval.
#[derive(Debug, Clone)]
pub struct Throttle {
  interval: Duration,
  last: Option<Instant>,
}

impl Throttle {
  #[must_use]
  pub fn new(interval: Duration) -> Self {
    Self {
      interval,
      last: None,
    }
  }

  /// Claims the slot at `now` if the interval since the last admitted call
  /// has elapsed.
  pub fn try_acquire(&mut self, now: Instant) -> bool {
    let ready = self.last.is_none_or(|last| {
      now.saturating_duration_since(last) >= self.interval
    });

    if ready {
      self.last = Some(now);
    }

    ready
  }
}

impl Default for Throttle {
  fn default() -> Self {
    Self::new(DEFAULT_THROTTLE_INTERVAL)
  }
}

/// The embedded checkout form behind the "buy now" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseForm {
  action: Url,
  form_id: String,
}

impl PurchaseForm {
  pub fn new(form_id: impl Into<String>, action: &str) -> Result<Self> {
    Ok(Self {
      action: Url::parse(action)?,
      form_id: form_id.into(),
    })
  }

  #[must_use]
  pub fn action(&self) -> &Url {
    &self.action
  }

  #[must_use]
  pub fn form_id(&self) -> &str {
    &self.form_id
  }
}

/// A request for the page to submit the purchase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
  pub action: Url,
  pub form_id: String,
}

#[derive(Debug, Clone)]
pub struct SpeedBumpOptions {
  pub purchase_form: Option<PurchaseForm>,
  pub throttle_interval: Duration,
}

impl Default for SpeedBumpOptions {
  fn default() -> Self {
    Self {
      purchase_form: None,
      throttle_interval: DEFAULT_THROTTLE_INTERVAL,
    }
  }
}

impl SpeedBumpOptions {
  #[must_use]
  pub fn builder() -> SpeedBumpOptionsBuilder {
    SpeedBumpOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct SpeedBumpOptionsBuilder {
  inner: SpeedBumpOptions,
}

impl SpeedBumpOptionsBuilder {
  #[must_use]
  pub fn build(self) -> SpeedBumpOptions {
    self.inner
  }

  #[must_use]
  pub fn purchase_form(self, purchase_form: PurchaseForm) -> Self {
    Self {
      inner: SpeedBumpOptions {
        purchase_form: Some(purchase_form),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn throttle_interval(self, throttle_interval: Duration) -> Self {
    Self {
      inner: SpeedBumpOptions {
        throttle_interval,
        ..self.inner
      },
    }
  }
}

/// One-shot modal: hidden until the reader reaches the target, then shown for
/// good.
#[derive(Debug, Clone)]
pub struct SpeedBump {
  pending: Option<ScrollPosition>,
  purchase_form: Option<PurchaseForm>,
  state: ModalState,
  throttle: Throttle,
}

impl SpeedBump {
  /// Offers the purchase form for submission. Only available while shown.
  #[must_use]
  pub fn buy_now(&self) -> Option<FormSubmission> {
    if self.state != ModalState::Shown {
      return None;
    }

    self.purchase_form.as_ref().map(|form| FormSubmission {
      action: form.action.clone(),
      form_id: form.form_id.clone(),
    })
  }

  /// Evaluates the latest dropped scroll position once the throttle allows.
  /// Returns true if this call revealed the modal.
  pub fn flush(&mut self, now: Instant) -> bool {
    if self.pending.is_none() || !self.throttle.try_acquire(now) {
      return false;
    }

    self.evaluate()
  }

  #[must_use]
  pub fn new(options: SpeedBumpOptions) -> Self {
    Self {
      pending: None,
      purchase_form: options.purchase_form,
      state: ModalState::Hidden,
      throttle: Throttle::new(options.throttle_interval),
    }
  }

  /// Handles a scroll notification. Positions arriving inside the throttle
  /// interval are kept as pending, the most recent replacing older ones.
  /// Returns true if this call revealed the modal.
  pub fn on_scroll(&mut self, now: Instant, position: ScrollPosition) -> bool {
    if self.state == ModalState::Shown {
      return false;
    }

    self.pending = Some(position);

    if !self.throttle.try_acquire(now) {
      trace!("scroll throttled");
      return false;
    }

    self.evaluate()
  }

  /// Moves Hidden to Shown. Returns false when already shown.
  pub fn show(&mut self) -> bool {
    if self.state == ModalState::Shown {
      return false;
    }

    self.state = ModalState::Shown;
    self.pending = None;

    debug!("speed bump shown");

    true
  }

  #[must_use]
  pub fn state(&self) -> ModalState {
    self.state
  }

  fn evaluate(&mut self) -> bool {
    match self.pending.take() {
      Some(position) if position.should_reveal() => self.show(),
      _ => false,
    }
  }
}

impl Default for SpeedBump {
  fn default() -> Self {
    Self::new(SpeedBumpOptions::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn position(offset: f64) -> ScrollPosition {
    ScrollPosition {
      offset,
      target_offset: 1500.0,
      viewport_height: 800.0,
    }
  }

  fn checkout() -> PurchaseForm {
    PurchaseForm::new("buy-form", "https://store.example.com/cart/add")
      .unwrap()
  }

  #[test]
  fn reveals_when_target_enters_viewport() {
    assert!(!should_reveal(0.0, 800.0, 1500.0));
    assert!(should_reveal(700.0, 800.0, 1500.0));
    assert!(should_reveal(900.0, 800.0, 1500.0));
  }

  #[test]
  fn throttle_admits_one_call_per_interval() {
    let start = Instant::now();

    let mut throttle = Throttle::new(Duration::from_millis(100));

    assert!(throttle.try_acquire(start));
    assert!(!throttle.try_acquire(start + Duration::from_millis(50)));
    assert!(throttle.try_acquire(start + Duration::from_millis(100)));
    assert!(!throttle.try_acquire(start + Duration::from_millis(199)));
  }

  #[test]
  fn shows_once_scrolled_far_enough() {
    let start = Instant::now();

    let mut speed_bump = SpeedBump::default();

    assert!(!speed_bump.on_scroll(start, position(0.0)));
    assert_eq!(speed_bump.state(), ModalState::Hidden);

    assert!(
      speed_bump.on_scroll(start + Duration::from_millis(150), position(800.0))
    );
    assert_eq!(speed_bump.state(), ModalState::Shown);
  }

  #[test]
  fn throttled_positions_are_evaluated_on_flush() {
    let start = Instant::now();

    let mut speed_bump = SpeedBump::default();

    assert!(!speed_bump.on_scroll(start, position(0.0)));
    assert!(
      !speed_bump.on_scroll(start + Duration::from_millis(10), position(900.0))
    );
    assert!(
      !speed_bump.on_scroll(start + Duration::from_millis(20), position(100.0))
    );

    assert!(!speed_bump.flush(start + Duration::from_millis(50)));
    assert!(!speed_bump.flush(start + Duration::from_millis(100)));
    assert_eq!(speed_bump.state(), ModalState::Hidden);

    assert!(
      !speed_bump.on_scroll(start + Duration::from_millis(120), position(900.0))
    );
    assert!(speed_bump.flush(start + Duration::from_millis(200)));
    assert_eq!(speed_bump.state(), ModalState::Shown);
  }

  #[test]
  fn show_is_idempotent() {
    let mut speed_bump = SpeedBump::default();

    assert!(speed_bump.show());
    assert!(!speed_bump.show());
    assert_eq!(speed_bump.state(), ModalState::Shown);
  }

  #[test]
  fn ignores_scrolling_after_shown() {
    let start = Instant::now();

    let mut speed_bump = SpeedBump::default();

    speed_bump.show();

    assert!(!speed_bump.on_scroll(start, position(0.0)));
    assert!(!speed_bump.flush(start + Duration::from_secs(1)));
    assert_eq!(speed_bump.state(), ModalState::Shown);
  }

  #[test]
  fn buy_now_requires_shown_modal() {
    let mut speed_bump = SpeedBump::new(
      SpeedBumpOptions::builder().purchase_form(checkout()).build(),
    );

    assert_eq!(speed_bump.buy_now(), None);

    speed_bump.show();

    let submission = speed_bump.buy_now().unwrap();

    assert_eq!(submission.form_id, "buy-form");
    assert_eq!(submission.action.host_str(), Some("store.example.com"));
  }

  #[test]
  fn buy_now_without_form_is_none() {
    let mut speed_bump = SpeedBump::default();

    speed_bump.show();

    assert_eq!(speed_bump.buy_now(), None);
  }

  #[test]
  fn rejects_relative_form_action() {
    assert!(matches!(
      PurchaseForm::new("buy-form", "/cart/add"),
      Err(Error::InvalidFormAction { .. })
    ));
  }

  #[test]
  fn modal_state_serializes_lowercase() {
    assert_eq!(
      serde_json::to_string(&ModalState::Shown).unwrap(),
      "\"shown\""
    );
  }
}
