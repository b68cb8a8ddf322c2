use services::{QuizAdvance, QuizEngine, QuizPhase};
use spotbot_core::model::{COMMENT_RANGE, LIKE_RANGE, RECENCY_LABELS, SHARE_RANGE, SkillTier};
use spotbot_core::time::{fixed_clock, fixed_now};

#[test]
fn quiz_loop_runs_the_full_roster_to_a_summary() {
    let mut engine = QuizEngine::new(fixed_clock()).with_rng_seed(7);
    let mut session = engine.start().expect("roster is compiled in");

    let mut summary = None;
    while session.phase() != QuizPhase::Finished {
        let presentation = engine.next_presentation();
        assert!(RECENCY_LABELS.contains(&presentation.recency));
        assert!(COMMENT_RANGE.contains(&presentation.stats.comments));
        assert!(SHARE_RANGE.contains(&presentation.stats.shares));
        assert!(LIKE_RANGE.contains(&presentation.stats.likes));

        let truth = session
            .current_item()
            .expect("a post is on screen while running")
            .authorship();
        let feedback = engine.submit_answer(&mut session, truth.is_bot()).unwrap();
        assert!(feedback.correct);

        if let QuizAdvance::Finished(result) = engine.advance(&mut session).unwrap() {
            summary = Some(result);
        }
    }

    let summary = summary.expect("final advance produces a summary");
    assert_eq!(summary.score(), 6);
    assert_eq!(summary.total(), 6);
    assert_eq!(summary.tier(), SkillTier::Excellent);
    assert_eq!(summary.started_at(), fixed_now());
    assert_eq!(session.answers().len(), 6);
}

#[test]
fn always_guessing_bot_scores_the_bot_posts_only() {
    let engine = QuizEngine::new(fixed_clock());
    let mut session = engine.start().unwrap();

    let expected: u32 = session
        .items()
        .iter()
        .filter(|item| item.authorship().is_bot())
        .count()
        .try_into()
        .unwrap();

    while session.phase() != QuizPhase::Finished {
        session.submit_answer(true).unwrap();
        let _ = session.advance(fixed_now()).unwrap();
    }

    assert_eq!(session.score(), expected);
    let progress = session.progress();
    assert!(progress.is_complete);
    assert_eq!(progress.answered, progress.total);
}
