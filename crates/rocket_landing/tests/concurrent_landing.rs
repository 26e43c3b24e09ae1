use rocket_landing::{LandingChecker, LandingStatus, Point, Rectangle, RocketId};
use std::sync::{Arc, Barrier};
use std::thread;

const ROCKETS: usize = 16;

#[test]
fn many_rockets_one_point_single_winner() {
    let checker = Arc::new(LandingChecker::new(Rectangle::new(5, 5, 10, 10)).unwrap());
    let barrier = Arc::new(Barrier::new(ROCKETS));

    let handles: Vec<_> = (0..ROCKETS)
        .map(|_| {
            let checker = Arc::clone(&checker);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let id = RocketId::new();
                barrier.wait();
                (id, checker.check_landing_availability(Point::new(9, 9), id))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners: Vec<_> = results.iter().filter(|(_, s)| s.is_ok()).collect();

    assert_eq!(winners.len(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|(_, s)| *s == LandingStatus::Clash)
            .count(),
        ROCKETS - 1
    );

    let reservation = checker.reservation();
    assert_eq!(reservation.holder(), winners[0].0);
    assert_eq!(reservation.footprint(), Rectangle::new(8, 8, 3, 3));
}

#[test]
fn same_rocket_never_clashes_with_itself_across_threads() {
    let checker = Arc::new(LandingChecker::new(Rectangle::new(5, 5, 10, 10)).unwrap());
    let rocket = RocketId::new();
    assert!(
        checker
            .check_landing_availability(Point::new(6, 6), rocket)
            .is_ok()
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                (0..250)
                    .map(|i| {
                        let point = Point::new(5 + i % 3, 5 + (i / 3) % 3);
                        checker.check_landing_availability(point, rocket)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for status in handle.join().unwrap() {
            assert_eq!(status, LandingStatus::OkForLanding);
        }
    }
}

#[test]
fn rejected_points_leave_reservation_untouched() {
    let checker = Arc::new(LandingChecker::new(Rectangle::new(5, 5, 3, 3)).unwrap());
    let owner = RocketId::new();
    checker.check_landing_availability(Point::new(6, 6), owner);
    let before = checker.reservation();

    let handles: Vec<_> = [(0, 2), (10, 20), (-5, -6), (200, 200)]
        .into_iter()
        .map(|(x, y)| {
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                checker.check_landing_availability(Point::new(x, y), RocketId::new())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), LandingStatus::OutOfPlatform);
    }
    assert_eq!(checker.reservation(), before);
}
