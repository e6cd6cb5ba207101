use super::*;

#[test]
fn recent_posts_returns_three_numbered_posts() {
    let posts = recent_posts();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2, 3]);
    assert!(posts[1].body.starts_with("This is the content of post 2."));
}

#[test]
fn recent_posts_carry_fixed_counters() {
    for post in recent_posts() {
        assert_eq!(post.likes, 23);
        assert_eq!(post.comments, 12);
    }
}

#[test]
fn quick_actions_have_distinct_tones() {
    let tones: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.tone).collect();
    assert_eq!(tones, ["cyan", "green", "purple"]);
}
