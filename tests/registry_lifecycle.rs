//! Lifecycle gate tests for the binding registry.

use axum::http::StatusCode;
use route_binder::lifecycle::Lifecycle;
use route_binder::routing::{BindError, BindingRegistry, HandlerItem};
use route_binder::Server;
use std::sync::{Arc, Barrier};
use std::thread;

mod common;

#[test]
fn test_no_binding_succeeds_after_start() {
    let server = Server::new("gate");
    server.bind_handler("/before", common::respond(StatusCode::OK)).unwrap();
    server.start().unwrap();

    for pattern in ["/before", "/after", "put:/user", "post:/user@example.com"] {
        let err = server
            .bind_handler(pattern, common::respond(StatusCode::CREATED))
            .unwrap_err();
        assert_eq!(err, BindError::ServerAlreadyRunning { pattern: pattern.into() });
    }

    assert_eq!(server.bindings().len(), 1);
    assert_eq!(common::status_of(&server.registry(), "/before"), Some(StatusCode::OK));
}

#[test]
fn test_bind_many_partial_application() {
    let lifecycle = Lifecycle::new();
    let registry = BindingRegistry::new(lifecycle.clone());

    let batch = vec![
        ("/p1".to_string(), HandlerItem::function(common::respond(StatusCode::OK))),
        ("/p2".to_string(), HandlerItem::function(common::respond(StatusCode::OK))),
    ];
    let entries = batch.into_iter().inspect(|(pattern, _)| {
        if pattern == "/p2" {
            lifecycle.start().unwrap();
        }
    });

    let err = registry.bind_many(entries).unwrap_err();
    assert_eq!(err, BindError::ServerAlreadyRunning { pattern: "/p2".into() });
    assert!(registry.contains("/p1"));
    assert!(!registry.contains("/p2"));
}

#[test]
fn test_independent_registries() {
    let first = Server::new("first");
    let second = Server::new("second");
    first.start().unwrap();

    assert!(first.bind_handler("/x", common::respond(StatusCode::OK)).is_err());
    assert!(second.bind_handler("/x", common::respond(StatusCode::OK)).is_ok());
}

#[test]
fn test_concurrent_bindings_before_start() {
    let registry = Arc::new(BindingRegistry::new(Lifecycle::new()));
    let threads = 8;
    let per_thread = 50;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    registry
                        .bind_handler(format!("/t{t}/r{i}"), common::respond(StatusCode::OK))
                        .unwrap();
                    registry
                        .bind_handler("/shared", common::respond(StatusCode::OK))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len(), threads * per_thread + 1);
}

#[test]
fn test_start_races_with_registration() {
    let lifecycle = Lifecycle::new();
    let registry = Arc::new(BindingRegistry::new(lifecycle.clone()));
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let registry = registry.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            let mut accepted = 0;
            for i in 0..1_000 {
                match registry.bind_handler(format!("/r{i}"), common::respond(StatusCode::OK)) {
                    Ok(()) => accepted += 1,
                    Err(BindError::ServerAlreadyRunning { .. }) => {}
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
            accepted
        })
    };

    barrier.wait();
    lifecycle.start().unwrap();
    let frozen = registry.len();

    let accepted = writer.join().unwrap();
    // Nothing lands after the transition completes.
    assert_eq!(registry.len(), frozen);
    assert_eq!(accepted, frozen);
}
