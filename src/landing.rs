/// Landing view state: mount/unmount lifecycle, room input, submit
use crate::config::InterfaceConfig;
use crate::destination::{DestinationInput, DestinationStatus, ForbiddenSet};
use crate::marker::{MarkerGuard, StyleMarker};
use crate::slots::{ResolvedSlots, SlotHost};

/// Starts a meeting for a destination. Retries and failures are its own business.
pub trait JoinOperation {
    fn join(&self, destination: &str);
}

/// An input that can check itself against its `pattern` attribute and show
/// the browser's validity message when it fails
pub trait ValidityReporter {
    fn report_validity(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    AwaitingSlotInjection,
    SlotsResolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined,
    Invalid,
}

/// Per-instance state of the landing view.
///
/// Owns the body class marker while mounted, so dropping the view also
/// releases it.
#[derive(Debug)]
pub struct LandingView<M: StyleMarker> {
    phase: Phase,
    slots: Option<ResolvedSlots>,
    destination: DestinationInput,
    marker: Option<MarkerGuard<M>>,
}

impl<M: StyleMarker> LandingView<M> {
    pub fn new(forbidden_set: ForbiddenSet) -> LandingView<M> {
        LandingView {
            phase: Phase::Unmounted,
            slots: None,
            destination: DestinationInput::new(forbidden_set),
            marker: None,
        }
    }

    /// Apply the body marker and inject every shown slot exactly once.
    ///
    /// A second mount without an unmount in between is ignored.
    pub fn mount(&mut self, config: &InterfaceConfig, host: &mut impl SlotHost, marker: M) {
        if self.phase != Phase::Unmounted {
            log::warn!("Landing view already mounted, ignoring mount");
            return;
        }

        let slots = ResolvedSlots::resolve(host, config);
        self.mount_resolved(slots, host, marker);
    }

    /// Like [`LandingView::mount`], with slots the caller already resolved.
    ///
    /// The view renders its containers from the same resolution, so the two
    /// never disagree.
    pub fn mount_resolved(&mut self, slots: ResolvedSlots, host: &mut impl SlotHost, marker: M) {
        if self.phase != Phase::Unmounted {
            log::warn!("Landing view already mounted, ignoring mount");
            return;
        }

        self.marker = Some(MarkerGuard::acquire(marker));
        self.phase = Phase::AwaitingSlotInjection;

        let injected = slots.inject_into(host);
        log::debug!("Landing view mounted, {} slot(s) injected", injected);

        self.slots = Some(slots);
        self.phase = Phase::SlotsResolved;
    }

    /// Release the body marker. Safe to call at any point.
    pub fn unmount(&mut self) {
        self.marker = None;
        self.slots = None;
        self.phase = Phase::Unmounted;
    }

    pub fn on_destination_change(&mut self, text: impl Into<String>) -> DestinationStatus {
        self.destination.on_change(text)
    }

    /// Join if the input is unbound or reports itself valid, and the room
    /// name is not empty.
    ///
    /// The caller has already prevented the browser's default form submission.
    pub fn on_submit(&self, input: Option<&dyn ValidityReporter>, join: &dyn JoinOperation) -> SubmitOutcome {
        // Browsers skip `pattern` on empty values, so emptiness is checked here too
        let valid = input.is_none_or(|input| input.report_validity());

        if valid && !self.destination.text().is_empty() {
            join.join(self.destination.text());
            SubmitOutcome::Joined
        } else {
            log::debug!("Room name {:?} rejected by input validation", self.destination.text());
            SubmitOutcome::Invalid
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn slots(&self) -> Option<&ResolvedSlots> {
        self.slots.as_ref()
    }

    pub fn destination(&self) -> &DestinationInput {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::matches_room_pattern;
    use crate::marker::WELCOME_PAGE_CLASS;
    use crate::marker::testing::FakeClassList;
    use crate::slots::SlotKind;
    use crate::slots::testing::FakeSlotHost;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingJoin {
        calls: RefCell<Vec<String>>,
    }

    impl JoinOperation for RecordingJoin {
        fn join(&self, destination: &str) {
            self.calls.borrow_mut().push(destination.to_string());
        }
    }

    /// Input that validates against the room pattern and counts reports
    struct FakeInput {
        value: String,
        reports: Cell<usize>,
    }

    impl FakeInput {
        fn new(value: &str) -> FakeInput {
            FakeInput {
                value: value.to_string(),
                reports: Cell::new(0),
            }
        }
    }

    impl ValidityReporter for FakeInput {
        fn report_validity(&self) -> bool {
            self.reports.set(self.reports.get() + 1);
            matches_room_pattern(&self.value)
        }
    }

    fn enabled_config() -> InterfaceConfig {
        InterfaceConfig {
            display_welcome_page_additional_card: true,
            display_welcome_page_content: true,
            display_welcome_page_toolbar_additional_content: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_mount_with_empty_templates() {
        let mut view = LandingView::new(ForbiddenSet::Pattern);
        let mut host = FakeSlotHost::default()
            .with_template(SlotKind::Card, "")
            .with_template(SlotKind::Content, " ")
            .with_template(SlotKind::ToolbarContent, "\n");
        let body = FakeClassList::default();

        view.mount(&enabled_config(), &mut host, body.clone());

        assert_eq!(host.total_appended(), 0);
        assert_eq!(view.phase(), Phase::SlotsResolved);
        assert!(body.has(WELCOME_PAGE_CLASS));

        view.unmount();

        assert_eq!(view.phase(), Phase::Unmounted);
        assert!(!body.has(WELCOME_PAGE_CLASS));
    }

    #[test]
    fn test_slots_injected_once() {
        let mut view = LandingView::new(ForbiddenSet::Pattern);
        let mut host = FakeSlotHost::default().with_template(SlotKind::Card, "<div>promo</div>");
        let body = FakeClassList::default();

        view.mount(&enabled_config(), &mut host, body.clone());
        view.mount(&enabled_config(), &mut host, body.clone());

        assert_eq!(host.appended(SlotKind::Card), 1);
        assert!(view.slots().unwrap().is_shown(SlotKind::Card));
    }

    #[test]
    fn test_remount_after_unmount() {
        let mut view = LandingView::new(ForbiddenSet::Pattern);
        let mut host = FakeSlotHost::default().with_template(SlotKind::Content, "<p>x</p>");
        let body = FakeClassList::default();

        view.mount(&enabled_config(), &mut host, body.clone());
        view.unmount();
        view.mount(&enabled_config(), &mut host, body.clone());

        assert_eq!(host.appended(SlotKind::Content), 2);
        assert!(body.has(WELCOME_PAGE_CLASS));
    }

    #[test]
    fn test_unmount_without_mount() {
        let mut view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::Pattern);

        view.unmount();
        view.unmount();

        assert_eq!(view.phase(), Phase::Unmounted);
        assert!(view.slots().is_none());
    }

    #[test]
    fn test_drop_releases_marker() {
        let body = FakeClassList::default();
        {
            let mut view = LandingView::new(ForbiddenSet::Pattern);
            view.mount(&InterfaceConfig::default(), &mut FakeSlotHost::default(), body.clone());
            assert!(body.has(WELCOME_PAGE_CLASS));
        }
        assert!(!body.has(WELCOME_PAGE_CLASS));
    }

    #[test]
    fn test_submit_valid_name_joins_once() {
        let mut view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::Pattern);
        let join = RecordingJoin::default();
        let input = FakeInput::new("safe-room-name");

        view.on_destination_change("safe-room-name");
        let outcome = view.on_submit(Some(&input as &dyn ValidityReporter), &join);

        assert_eq!(outcome, SubmitOutcome::Joined);
        assert_eq!(*join.calls.borrow(), vec!["safe-room-name".to_string()]);
        assert_eq!(input.reports.get(), 1);
    }

    #[test]
    fn test_submit_invalid_name_does_not_join() {
        let mut view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::Pattern);
        let join = RecordingJoin::default();
        let input = FakeInput::new("bad#name");

        let status = view.on_destination_change("bad#name");
        let outcome = view.on_submit(Some(&input as &dyn ValidityReporter), &join);

        assert!(status.forbidden);
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(join.calls.borrow().is_empty());
        // Validity UI was surfaced
        assert_eq!(input.reports.get(), 1);
    }

    #[test]
    fn test_submit_without_input_joins() {
        let mut view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::Pattern);
        let join = RecordingJoin::default();

        view.on_destination_change("anything#goes");
        let outcome = view.on_submit(None, &join);

        assert_eq!(outcome, SubmitOutcome::Joined);
        assert_eq!(*join.calls.borrow(), vec!["anything#goes".to_string()]);
    }

    /// Follows HTML constraint rules: an empty value satisfies `pattern`
    struct PatternOnlyInput {
        value: String,
    }

    impl ValidityReporter for PatternOnlyInput {
        fn report_validity(&self) -> bool {
            self.value.is_empty() || matches_room_pattern(&self.value)
        }
    }

    #[test]
    fn test_submit_empty_name_does_not_join() {
        let view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::Pattern);
        let join = RecordingJoin::default();
        let input = PatternOnlyInput { value: String::new() };

        let outcome = view.on_submit(Some(&input as &dyn ValidityReporter), &join);

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(join.calls.borrow().is_empty());
    }

    #[test]
    fn test_submit_empty_name_without_input() {
        let mut view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::Pattern);
        let join = RecordingJoin::default();

        view.on_destination_change("room");
        view.on_destination_change("");
        let outcome = view.on_submit(None, &join);

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(join.calls.borrow().is_empty());
    }

    #[test]
    fn test_mount_resolved_uses_given_slots() {
        let mut view = LandingView::new(ForbiddenSet::Pattern);
        let mut host = FakeSlotHost::default().with_template(SlotKind::Content, "<p>news</p>");
        let body = FakeClassList::default();
        let slots = ResolvedSlots::resolve(&host, &enabled_config());

        // The template changes after the page resolved its slots
        host.templates.insert(SlotKind::Card, "<div>late</div>".to_string());
        view.mount_resolved(slots, &mut host, body.clone());

        assert_eq!(view.slots(), Some(&slots));
        assert_eq!(host.appended(SlotKind::Content), 1);
        assert_eq!(host.appended(SlotKind::Card), 0);
        assert!(body.has(WELCOME_PAGE_CLASS));
    }

    #[test]
    fn test_mount_resolved_only_once() {
        let mut view = LandingView::new(ForbiddenSet::Pattern);
        let mut host = FakeSlotHost::default().with_template(SlotKind::Card, "<div>promo</div>");
        let slots = ResolvedSlots::resolve(&host, &enabled_config());
        let body = FakeClassList::default();

        view.mount_resolved(slots, &mut host, body.clone());
        view.mount(&enabled_config(), &mut host, body.clone());

        assert_eq!(host.appended(SlotKind::Card), 1);
    }

    #[test]
    fn test_dot_is_advisory_only() {
        let mut view: LandingView<FakeClassList> = LandingView::new(ForbiddenSet::PatternAndDot);
        let join = RecordingJoin::default();
        let input = FakeInput::new("v1.2");

        let status = view.on_destination_change("v1.2");
        let outcome = view.on_submit(Some(&input as &dyn ValidityReporter), &join);

        assert!(status.forbidden);
        assert_eq!(outcome, SubmitOutcome::Joined);
    }
}
