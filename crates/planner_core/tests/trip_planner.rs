use planner_core::{
    ActiveOverlay, CalendarDay, ConfirmParticipantRequest, CreateLinkRequest, CreateTripRequest,
    DateRangeSelection, FlowController, FlowError, FlowRules, GatewayError, GatewayResult,
    InviteSet, LinkFormError, ParticipantError, PlannerError, StepOutcome, Submission, TripForm,
    TripGateway, TripId, TripPlanner, TripStep, UpdateTripRequest,
};
use std::cell::RefCell;
use uuid::Uuid;

#[derive(Default)]
struct RecordingGateway {
    fail_with: Option<GatewayError>,
    created: RefCell<Vec<CreateTripRequest>>,
    updated: RefCell<Vec<UpdateTripRequest>>,
    confirmed: RefCell<Vec<ConfirmParticipantRequest>>,
    links: RefCell<Vec<CreateLinkRequest>>,
}

impl RecordingGateway {
    fn failing() -> Self {
        Self {
            fail_with: Some(GatewayError::Transport("offline".to_string())),
            ..Self::default()
        }
    }

    fn outcome<T>(&self, value: T) -> GatewayResult<T> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

impl TripGateway for RecordingGateway {
    fn create_trip(&self, request: &CreateTripRequest) -> GatewayResult<TripId> {
        self.created.borrow_mut().push(request.clone());
        self.outcome(trip_id())
    }

    fn update_trip(&self, request: &UpdateTripRequest) -> GatewayResult<()> {
        self.updated.borrow_mut().push(request.clone());
        self.outcome(())
    }

    fn confirm_participant(&self, request: &ConfirmParticipantRequest) -> GatewayResult<()> {
        self.confirmed.borrow_mut().push(request.clone());
        self.outcome(())
    }

    fn create_link(&self, request: &CreateLinkRequest) -> GatewayResult<Uuid> {
        self.links.borrow_mut().push(request.clone());
        self.outcome(Uuid::nil())
    }
}

fn trip_id() -> TripId {
    Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap()
}

fn full_range() -> DateRangeSelection {
    DateRangeSelection::empty()
        .select_day(CalendarDay::from_ymd(2024, 3, 15).unwrap())
        .select_day(CalendarDay::from_ymd(2024, 3, 10).unwrap())
}

fn invites() -> InviteSet {
    InviteSet::try_from_emails(["bia@mail.com", "caio@mail.com"]).unwrap()
}

#[test]
fn submit_create_sends_guarded_payload() {
    let planner = TripPlanner::new(RecordingGateway::default());
    let controller = FlowController::create_at(TripStep::InviteGuests);
    let form = TripForm::new("  Lisboa ", full_range());

    let created = planner
        .submit_create(&controller, &form, &invites())
        .unwrap();
    assert_eq!(created, trip_id());

    let sent = planner.gateway().created.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].destination, "Lisboa");
    assert_eq!(sent[0].starts_at, "2024-03-10T00:00:00Z");
    assert_eq!(sent[0].ends_at, "2024-03-15T00:00:00Z");
    assert_eq!(sent[0].emails_to_invite, vec!["bia@mail.com", "caio@mail.com"]);
}

#[test]
fn submit_create_follows_controller_rules() {
    let planner = TripPlanner::new(RecordingGateway::default());
    let form = TripForm::new("NYC", full_range());
    let controller = FlowController::create().with_rules(FlowRules {
        min_destination_chars: 3,
    });

    let (controller, _) = controller.advance(&form).unwrap();
    let (controller, outcome) = controller.advance(&form).unwrap();
    assert_eq!(outcome, StepOutcome::ReadyToSubmit);

    let created = planner
        .submit_create(&controller, &form, &InviteSet::new())
        .unwrap();
    assert_eq!(created, trip_id());
    assert_eq!(planner.gateway().created.borrow()[0].destination, "NYC");

    let strict = FlowController::create_at(TripStep::InviteGuests);
    assert_eq!(
        planner
            .submit_create(&strict, &form, &InviteSet::new())
            .unwrap_err(),
        PlannerError::Flow(FlowError::EmptyOrShortDestination)
    );
    assert_eq!(planner.gateway().created.borrow().len(), 1);
}

#[test]
fn submit_create_refuses_details_step_and_edit_mode() {
    let planner = TripPlanner::new(RecordingGateway::default());
    let form = TripForm::new("Lisboa", full_range());

    let err = planner
        .submit_create(&FlowController::create(), &form, &invites())
        .unwrap_err();
    assert_eq!(err, PlannerError::StepNotFinal(TripStep::Details));

    let err = planner
        .submit_create(&FlowController::edit(), &form, &invites())
        .unwrap_err();
    assert!(matches!(err, PlannerError::WrongMode(_)));
    assert!(planner.gateway().created.borrow().is_empty());
}

#[test]
fn submit_create_runs_guards_before_calling_gateway() {
    let planner = TripPlanner::new(RecordingGateway::default());
    let controller = FlowController::create_at(TripStep::InviteGuests);
    let form = TripForm::new("Lisboa", DateRangeSelection::empty());

    let err = planner
        .submit_create(&controller, &form, &invites())
        .unwrap_err();
    assert_eq!(err, PlannerError::Flow(FlowError::IncompleteDateRange));
    assert!(!err.is_network());
    assert!(planner.gateway().created.borrow().is_empty());
}

#[test]
fn network_failure_leaves_state_intact_for_retry() {
    let planner = TripPlanner::new(RecordingGateway::failing());
    let controller = FlowController::create_at(TripStep::InviteGuests).open(ActiveOverlay::None);
    let form = TripForm::new("Lisboa", full_range());
    let guests = invites();

    let (controller_before, form_before, guests_before) =
        (controller, form.clone(), guests.clone());
    let mut submission = Submission::Idle;

    let err = planner_core::track(&mut submission, |during| {
        assert!(during.is_in_flight());
        planner.submit_create(&controller, &form, &guests)
    })
    .unwrap_err();

    assert!(err.is_network());
    assert_eq!(submission, Submission::Idle);
    assert_eq!(controller, controller_before);
    assert_eq!(form, form_before);
    assert_eq!(guests, guests_before);
}

#[test]
fn submit_update_uses_update_guard() {
    let planner = TripPlanner::new(RecordingGateway::default());

    planner
        .submit_update(trip_id(), &TripForm::new("Rio", full_range()))
        .unwrap();
    let sent = planner.gateway().updated.borrow();
    assert_eq!(sent[0].id, trip_id());
    assert_eq!(sent[0].destination, "Rio");
    drop(sent);

    let err = planner
        .submit_update(trip_id(), &TripForm::new(" ", full_range()))
        .unwrap_err();
    assert_eq!(err, PlannerError::Flow(FlowError::EmptyOrShortDestination));
    assert_eq!(planner.gateway().updated.borrow().len(), 1);
}

#[test]
fn confirm_attendance_validates_email_first() {
    let planner = TripPlanner::new(RecordingGateway::default());
    let participant = Uuid::new_v4();

    let err = planner
        .confirm_attendance(participant, "Ana", "ana-at-mail")
        .unwrap_err();
    assert_eq!(
        err,
        PlannerError::Participant(ParticipantError::InvalidFormat("ana-at-mail".to_string()))
    );

    planner
        .confirm_attendance(participant, " Ana ", "ANA@mail.com")
        .unwrap();
    let sent = planner.gateway().confirmed.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].participant_id, participant);
    assert_eq!(sent[0].name, "Ana");
    assert_eq!(sent[0].email, "ana@mail.com");
}

#[test]
fn add_link_rejects_empty_title_and_bad_url() {
    let planner = TripPlanner::new(RecordingGateway::default());

    assert_eq!(
        planner.add_link(trip_id(), "", "https://a.com").unwrap_err(),
        PlannerError::Link(LinkFormError::EmptyTitle)
    );
    assert!(matches!(
        planner.add_link(trip_id(), "Hotel", "hotel"),
        Err(PlannerError::Link(LinkFormError::InvalidUrl(_)))
    ));
    assert!(planner.gateway().links.borrow().is_empty());

    planner
        .add_link(trip_id(), "Hotel", "https://hotel.com/booking/7")
        .unwrap();
    assert_eq!(planner.gateway().links.borrow()[0].trip_id, trip_id());
}
