mod common;

use common::{all_par4, entry, group, match_tournament, with_scores};
use golf_standings::model::Team;
use golf_standings::score::{
    MatchKind, build_match, build_matches, derive_status, match_scorecard, match_status,
    matches_not_started, summarize_matches,
};

const TEE: &str = "2025-09-26T07:35:00+02:00";

#[test]
fn test3_singles_three_holes() {
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &[4, 3, 5]);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &[5, 4, 5]);
    let g = group(1, TEE, 1, vec![a, b]);

    let m = build_match(&g).expect("singles pairing");
    assert_eq!(m.kind, MatchKind::Singles);

    let status = match_status(&m, 1);
    assert_eq!(status.side1_wins, 2);
    assert_eq!(status.side2_wins, 0);
    assert_eq!(status.thru, 3);
    assert_eq!(status.status_text, "USA 2 UP");
    assert_eq!(status.leader_team, Some(Team::Usa));
    assert!(!status.is_finished);
    assert!(!status.is_dormie);
}

#[test]
fn test3_sides_follow_team_not_position() {
    // EUR member listed first
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &[3]);
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &[4]);
    let g = group(1, TEE, 1, vec![b, a]);

    let m = build_match(&g).expect("singles pairing");
    assert_eq!(m.usa[0].id, 1);
    assert_eq!(m.eur[0].id, 2);
    let status = match_status(&m, 1);
    assert_eq!(status.status_text, "EUR 1 UP");
    assert_eq!(status.side2_wins, 1);
}

#[test]
fn test3_dormie_after_sixteen() {
    let status = derive_status(5, 3, 16);
    assert_eq!(status.status_text, "Dormie");
    assert!(status.is_dormie);
    assert!(!status.is_finished);
}

#[test]
fn test3_dormie_from_results() {
    // USA wins holes 1 and 2, the next 14 are halved
    let mut usa_cards = vec![3, 3];
    usa_cards.extend(std::iter::repeat_n(4, 14));
    let mut eur_cards = vec![4, 4];
    eur_cards.extend(std::iter::repeat_n(4, 14));
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &usa_cards);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &eur_cards);
    let g = group(1, TEE, 1, vec![a, b]);

    let status = match_status(&build_match(&g).expect("pairing"), 1);
    assert_eq!(status.thru, 16);
    assert_eq!(status.status_text, "Dormie");
    assert!(status.is_dormie);
}

#[test]
fn test3_match_closed_out_early() {
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &[4; 15]);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &[3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]);
    let g = group(1, TEE, 1, vec![a, b]);

    let status = match_status(&build_match(&g).expect("pairing"), 1);
    assert_eq!(status.thru, 15);
    assert_eq!(status.status_text, "EUR wins 4 & 3");
    assert!(status.is_finished);
    assert_eq!(status.leader_team, Some(Team::Eur));
}

#[test]
fn test3_halved_match() {
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &[4; 18]);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &[4; 18]);
    let g = group(1, TEE, 1, vec![a, b]);

    let status = match_status(&build_match(&g).expect("pairing"), 1);
    assert_eq!(status.thru, 18);
    assert_eq!(status.status_text, "Halved");
    assert!(status.is_finished);
}

#[test]
fn test3_four_ball_uses_best_ball() {
    // array order is mixed on purpose
    let u1 = with_scores(entry(1, "Usa One", Some(Team::Usa)), 1, 1, &[5, 4, 6]);
    let e1 = with_scores(entry(3, "Eur One", Some(Team::Eur)), 1, 1, &[4, 4, 4]);
    let u2 = with_scores(entry(2, "Usa Two", Some(Team::Usa)), 1, 1, &[3, 5, 4]);
    let e2 = with_scores(entry(4, "Eur Two", Some(Team::Eur)), 1, 1, &[6, 5, 5]);
    let g = group(1, TEE, 1, vec![u1, e1, u2, e2]);

    let m = build_match(&g).expect("four-ball pairing");
    assert_eq!(m.kind, MatchKind::FourBall);
    let mut usa_ids: Vec<i64> = m.usa.iter().map(|e| e.id).collect();
    usa_ids.sort_unstable();
    assert_eq!(usa_ids, vec![1, 2]);

    // best balls: USA 3 4 4, EUR 4 4 4
    let status = match_status(&m, 1);
    assert_eq!(status.thru, 3);
    assert_eq!(status.side1_wins, 1);
    assert_eq!(status.side2_wins, 0);
    assert_eq!(status.status_text, "USA 1 UP");
}

#[test]
fn test3_partner_result_is_enough_for_a_side() {
    let u1 = with_scores(entry(1, "Usa One", Some(Team::Usa)), 1, 1, &[4, 4]);
    let u2 = entry(2, "Usa Two", Some(Team::Usa));
    let e1 = with_scores(entry(3, "Eur One", Some(Team::Eur)), 1, 1, &[4]);
    let e2 = entry(4, "Eur Two", Some(Team::Eur));
    let g = group(1, TEE, 1, vec![u1, u2, e1, e2]);

    // hole 2 has a USA score only, so it does not count
    let status = match_status(&build_match(&g).expect("pairing"), 1);
    assert_eq!(status.thru, 1);
    assert_eq!(status.status_text, "All Square");
}

#[test]
fn test3_groups_that_are_not_pairings() {
    let three = group(
        1,
        TEE,
        1,
        vec![
            entry(1, "A A", Some(Team::Usa)),
            entry(2, "B B", Some(Team::Eur)),
            entry(3, "C C", Some(Team::Usa)),
        ],
    );
    assert!(build_match(&three).is_none());

    let lopsided = group(
        2,
        TEE,
        1,
        vec![
            entry(4, "D D", Some(Team::Usa)),
            entry(5, "E E", Some(Team::Usa)),
            entry(6, "F F", Some(Team::Usa)),
            entry(7, "G G", Some(Team::Eur)),
        ],
    );
    assert!(build_match(&lopsided).is_none());

    let untagged = group(3, TEE, 1, vec![entry(8, "H H", None), entry(9, "I I", None)]);
    assert!(build_match(&untagged).is_none());

    let t = match_tournament(vec![three, lopsided, untagged]);
    assert!(build_matches(&t).is_empty());
}

#[test]
fn test3_only_the_scored_round_counts() {
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &[3, 3]);
    let a = with_scores(a, 2, 1, &[5]);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &[4, 4]);
    let b = with_scores(b, 2, 1, &[4]);
    let g = group(1, TEE, 1, vec![a, b]);
    let m = build_match(&g).expect("pairing");

    assert_eq!(match_status(&m, 1).status_text, "USA 2 UP");
    let round2 = match_status(&m, 2);
    assert_eq!(round2.thru, 1);
    assert_eq!(round2.status_text, "EUR 1 UP");
}

#[test]
fn test3_scorecard_running_state() {
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 1, &[3, 5, 4]);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 1, &[4, 4, 4]);
    let g = group(1, TEE, 1, vec![a, b]);
    let card = match_scorecard(&build_match(&g).expect("pairing"), &all_par4(), 1);

    assert_eq!(card.len(), 18);
    assert_eq!(card[0].winner, Some(Team::Usa));
    assert_eq!(card[0].status, "USA 1 UP");
    assert_eq!(card[1].winner, Some(Team::Eur));
    assert_eq!(card[1].status, "AS");
    assert_eq!(card[2].winner, None);
    assert_eq!(card[2].status, "AS");
    assert_eq!(card[3].usa, None);
    assert_eq!(card[3].status, "");
    assert_eq!(card[3].par, 4);
}

#[test]
fn test3_scorecard_follows_shotgun_order() {
    // starts on 10: USA takes 10 and 11, EUR takes 12 and then 1
    let a = with_scores(entry(1, "Alpha Able", Some(Team::Usa)), 1, 10, &[3, 3, 5]);
    let a = with_scores(a, 1, 1, &[4]);
    let b = with_scores(entry(2, "Bravo Baker", Some(Team::Eur)), 1, 10, &[4, 4, 4]);
    let b = with_scores(b, 1, 1, &[3]);
    let g = group(1, TEE, 10, vec![a, b]);
    let m = build_match(&g).expect("pairing");
    let card = match_scorecard(&m, &all_par4(), 1);

    let holes: Vec<i32> = card.iter().map(|r| r.hole).collect();
    assert_eq!(holes, (1..=18).collect::<Vec<_>>());

    assert_eq!(card[9].status, "USA 1 UP");
    assert_eq!(card[10].status, "USA 2 UP");
    assert_eq!(card[11].status, "USA 1 UP");
    assert_eq!(card[12].status, "");
    assert_eq!(card[0].winner, Some(Team::Eur));
    assert_eq!(card[0].status, "AS");
    assert_eq!(card[1].status, "");

    // hole 1 was played last, so its running state is the live state
    assert_eq!(match_status(&m, 1).status_text, "All Square");
}

#[test]
fn test3_side_labels() {
    let g = group(
        1,
        TEE,
        1,
        vec![
            entry(1, "Scottie Sample", Some(Team::Usa)),
            entry(3, "Rory Example", Some(Team::Eur)),
            entry(2, "Xander Case", Some(Team::Usa)),
            entry(4, "Jon Rahmish", Some(Team::Eur)),
        ],
    );
    let singles = group(
        2,
        TEE,
        1,
        vec![entry(5, "Justin Solo", Some(Team::Usa)), entry(6, "Tommy Alone", Some(Team::Eur))],
    );
    let t = match_tournament(vec![g, singles]);

    let summaries = summarize_matches(&t, 1);
    let four_ball = summaries.iter().find(|s| s.group_id == 1).expect("four-ball summary");
    assert_eq!(four_ball.usa_label, "Sample / Case");
    assert_eq!(four_ball.eur_label, "Example / Rahmish");

    let single = summaries.iter().find(|s| s.group_id == 2).expect("singles summary");
    assert_eq!(single.usa_label, "Justin Solo");
    assert_eq!(single.eur_label, "Tommy Alone");
}

#[test]
fn test3_summaries_in_tee_time_order() {
    let late = group(
        10,
        "2025-09-26T09:00:00+02:00",
        1,
        vec![entry(1, "Late Usa", Some(Team::Usa)), entry(2, "Late Eur", Some(Team::Eur))],
    );
    let mut human = entry(3, "Early Human", Some(Team::Usa));
    human.is_human = true;
    let early = group(
        20,
        "2025-09-26T07:00:00+02:00",
        10,
        vec![human, entry(4, "Early Eur", Some(Team::Eur))],
    );
    let t = match_tournament(vec![late, early]);

    let summaries = summarize_matches(&t, 1);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].group_id, 20);
    assert!(summaries[0].is_human_match);
    assert_eq!(summaries[0].group_status, "Playing 10");
    assert_eq!(summaries[1].usa_names, vec!["Late Usa".to_string()]);
    assert!(!summaries[1].is_human_match);
    assert!(matches_not_started(&summaries));
}
