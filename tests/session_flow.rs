//! Full sessions driven through the headless presenter

use sky_fall::audio::Sound;
use sky_fall::consts::SIM_DT;
use sky_fall::presenter::{HeadlessPresenter, Indicator, Label, PresenterCommand};
use sky_fall::sim::{GamePhase, GameSession, ObjectKind, SeededRandom};
use sky_fall::Tuning;

fn run_until_over(session: &mut GameSession<HeadlessPresenter, SeededRandom>, limit: f32) {
    while session.is_running() && session.elapsed() < limit {
        session.tick(SIM_DT);
        for object in session.presenter_mut().advance(SIM_DT) {
            session.complete_motion(object);
        }
    }
}

#[test]
fn session_runs_to_game_over() {
    let mut session =
        GameSession::new(Tuning::default(), HeadlessPresenter::new(), SeededRandom::new(2024))
            .unwrap();
    session.start();
    run_until_over(&mut session, 3600.0);

    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.player().energy, 0);
    assert_eq!(session.active_count(), 0);

    let presenter = session.presenter();
    assert!(presenter.indicator_visible(Indicator::GameOver));
    assert_eq!(presenter.label(Label::Energy), Some("0%"));
    assert_eq!(presenter.sounds().filter(|s| *s == Sound::SessionEnd).count(), 1);
    assert_eq!(presenter.in_flight_count(), 0);

    // Both kinds fell during the run
    let presented: Vec<ObjectKind> = presenter
        .commands()
        .iter()
        .filter_map(|c| match c {
            PresenterCommand::Present(m) => Some(m.object.kind),
            _ => None,
        })
        .collect();
    assert!(presented.contains(&ObjectKind::Hazard));
    assert!(presented.contains(&ObjectKind::Pickup));
}

#[test]
fn difficulty_reaches_floors_in_a_long_run() {
    // Pickups and hazards never land, so the run cannot end
    let tuning = Tuning {
        hazard_duration: 1.0e9,
        pickup_duration: 1.0e9,
        difficulty: sky_fall::tuning::DifficultyTuning {
            hazard_duration_floor: 1.0e9,
            pickup_duration_floor: 1.0e9,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut session =
        GameSession::new(tuning, HeadlessPresenter::new(), SeededRandom::new(7)).unwrap();
    session.start();
    for _ in 0..20 {
        session.tick(61.0);
    }
    assert!(session.is_running());
    assert_eq!(session.difficulty().hazard_interval, 0.25);
    assert_eq!(session.difficulty().level, 20);
    assert!(session.active_count() <= 40);
}

#[test]
fn restart_after_game_over_replays_from_full_energy() {
    let mut session =
        GameSession::new(Tuning::default(), HeadlessPresenter::new(), SeededRandom::new(11))
            .unwrap();
    session.start();
    run_until_over(&mut session, 3600.0);
    assert_eq!(session.phase(), GamePhase::GameOver);

    session.start();
    assert!(session.is_running());
    assert_eq!(session.player().energy, 100);
    assert_eq!(session.player().score, 0);
    assert_eq!(session.elapsed(), 0.0);
    assert!(!session.presenter().indicator_visible(Indicator::GameOver));

    run_until_over(&mut session, 30.0);
    assert!(session.player().energy <= 100);
}

#[test]
fn tuning_file_drives_session() {
    let tuning = Tuning::from_json(r#"{ "energy": { "hazard_damage": 100 } }"#).unwrap();
    let mut session =
        GameSession::new(tuning, HeadlessPresenter::new(), SeededRandom::new(3)).unwrap();
    session.start();
    session.tick(3.0);
    let hazard = session.presenter_mut().finish_all()[0];
    session.complete_motion(hazard);
    session.tick(0.0);

    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.presenter().sounds().last(), Some(Sound::SessionEnd));
}
