//! Sync engine integration tests: FIFO delivery, all-or-nothing drain,
//! offline short-circuit, idempotent remote upserts, best-effort dispatch.

mod common;

use common::MockRemote;

use vha_core::connectivity::ConnectivityMonitor;
use vha_core::db::Database;
use vha_core::models::{AmbulanceRequest, Appointment, OpType, Order, Profile, QueueOperation};
use vha_core::sync::{self, DispatchNotice, Remote, SyncOutcome};

fn profile_op(name: &str) -> QueueOperation {
    QueueOperation::CreateProfile(Profile::new(name.into(), "1".into(), "Kibera".into()))
}

#[test]
fn test_offline_short_circuits() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(false);
    let (mut remote, state) = MockRemote::new();

    db.enqueue(&profile_op("A")).unwrap();
    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();

    assert_eq!(outcome, SyncOutcome::Offline);
    assert!(state.lock().unwrap().submissions.is_empty());
    assert_eq!(db.queue_len().unwrap(), 1);
}

#[test]
fn test_empty_queue_is_nothing_to_sync() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, _state) = MockRemote::new();

    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();
    assert_eq!(outcome, SyncOutcome::NothingToSync);
}

#[test]
fn test_fifo_delivery_order() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();

    let ops = [profile_op("A"), profile_op("B"), profile_op("C")];
    for op in &ops {
        db.enqueue(op).unwrap();
    }

    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();
    assert_eq!(outcome, SyncOutcome::Complete { synced: 3 });

    let submitted: Vec<String> = state
        .lock()
        .unwrap()
        .submissions
        .iter()
        .map(|(_, id)| id.clone())
        .collect();
    let expected: Vec<String> = ops.iter().map(|op| op.payload_id().to_string()).collect();
    assert_eq!(submitted, expected);
    assert_eq!(db.queue_len().unwrap(), 0);
}

#[test]
fn test_all_or_nothing_on_mid_queue_failure() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();

    let ops = [profile_op("A"), profile_op("B"), profile_op("C")];
    for op in &ops {
        db.enqueue(op).unwrap();
    }
    state
        .lock()
        .unwrap()
        .fail_ids
        .insert(ops[1].payload_id().to_string());

    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();
    match outcome {
        SyncOutcome::Failed { op_type, .. } => assert_eq!(op_type, OpType::CreateProfile),
        other => panic!("expected Failed, got {:?}", other),
    }

    // First succeeded, second failed, third never attempted
    assert_eq!(state.lock().unwrap().submissions.len(), 2);

    // Entire queue retained in original order, including the delivered entry
    let retained: Vec<QueueOperation> = db
        .peek_queue()
        .unwrap()
        .into_iter()
        .map(|e| e.op)
        .collect();
    assert_eq!(retained, ops.to_vec());
}

#[test]
fn test_retry_after_failure_redelivers_whole_queue() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();

    let ops = [profile_op("A"), profile_op("B")];
    for op in &ops {
        db.enqueue(op).unwrap();
    }
    state
        .lock()
        .unwrap()
        .fail_ids
        .insert(ops[1].payload_id().to_string());

    assert!(matches!(
        sync::try_sync(&monitor, &db, &mut remote).unwrap(),
        SyncOutcome::Failed { .. }
    ));

    // Server recovers; the retry re-submits A (idempotent upsert, one record)
    state.lock().unwrap().fail_ids.clear();
    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();
    assert_eq!(outcome, SyncOutcome::Complete { synced: 2 });

    let state = state.lock().unwrap();
    assert_eq!(state.submissions.len(), 4); // A, B(fail), A, B
    assert_eq!(state.profiles.len(), 2);
    assert_eq!(db.queue_len().unwrap(), 0);
}

#[test]
fn test_remote_upsert_is_idempotent() {
    let (mut remote, state) = MockRemote::new();
    let profile = Profile::new("Amina".into(), "1".into(), "Kibera".into());

    remote.submit_profile(&profile).unwrap();
    remote.submit_profile(&profile).unwrap();

    assert_eq!(state.lock().unwrap().profiles.len(), 1);
}

#[test]
fn test_emergency_appointment_notifies_dispatch() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();

    let emergency = Appointment::new("patient-1".into(), vec!["chest pain".into()]);
    let routine = Appointment::new("patient-1".into(), vec!["cough".into()]);
    db.enqueue(&QueueOperation::CreateAppointment(emergency.clone()))
        .unwrap();
    db.enqueue(&QueueOperation::CreateAppointment(routine)).unwrap();

    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();
    assert_eq!(outcome, SyncOutcome::Complete { synced: 2 });

    // Only the emergency appointment produced a notice
    let state = state.lock().unwrap();
    assert_eq!(
        state.notices,
        vec![DispatchNotice::Emergency {
            patient_id: emergency.patient_id.clone()
        }]
    );
}

#[test]
fn test_ambulance_request_notifies_with_coordinates() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();

    let mut request = AmbulanceRequest::new("patient-1".into(), None);
    request.lat = Some(-1.29);
    request.lng = Some(36.82);
    db.enqueue(&QueueOperation::AmbulanceRequest(request.clone()))
        .unwrap();

    sync::try_sync(&monitor, &db, &mut remote).unwrap();

    let state = state.lock().unwrap();
    assert_eq!(
        state.notices,
        vec![DispatchNotice::Ambulance {
            profile_id: "patient-1".into(),
            lat: Some(-1.29),
            lng: Some(36.82),
        }]
    );
}

#[test]
fn test_notification_failure_does_not_fail_drain() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();
    state.lock().unwrap().fail_notify = true;

    db.enqueue(&QueueOperation::AmbulanceRequest(AmbulanceRequest::new(
        "patient-1".into(),
        None,
    )))
    .unwrap();

    let outcome = sync::try_sync(&monitor, &db, &mut remote).unwrap();
    assert_eq!(outcome, SyncOutcome::Complete { synced: 1 });
    assert_eq!(db.queue_len().unwrap(), 0);
    assert_eq!(state.lock().unwrap().ambulance_requests.len(), 1);
}

#[test]
fn test_mixed_queue_routes_by_type() {
    let db = Database::open_in_memory().unwrap();
    let monitor = ConnectivityMonitor::new(true);
    let (mut remote, state) = MockRemote::new();

    let profile = Profile::new("Amina".into(), "1".into(), "Kibera".into());
    let order = Order::new(profile.id.clone(), "ORS sachets".into());
    db.enqueue(&QueueOperation::CreateProfile(profile.clone()))
        .unwrap();
    db.enqueue(&QueueOperation::PlaceOrder(order.clone())).unwrap();

    sync::try_sync(&monitor, &db, &mut remote).unwrap();

    let state = state.lock().unwrap();
    assert_eq!(state.profiles.get(&profile.id), Some(&profile));
    assert_eq!(state.orders.get(&order.id), Some(&order));
    let types: Vec<OpType> = state.submissions.iter().map(|(t, _)| *t).collect();
    assert_eq!(types, vec![OpType::CreateProfile, OpType::PlaceOrder]);
}
