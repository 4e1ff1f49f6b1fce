/// Rank players by metric tuples, highest first.
///
/// Later tuple entries break ties left by earlier ones; players with
/// identical full tuples share a placing. Placings are 1-based, and a shared
/// placing consumes only one rank slot, so `[[10], [10], [5]]` places as
/// `[1, 1, 2]`.
///
/// A metric where lower is better must be negated by the caller before
/// submission; the direction of each metric is fixed per game.
pub fn placings_from_metrics(metrics: Vec<Vec<i32>>) -> Vec<usize> {
    let mut unique = metrics.clone();
    unique.sort();
    unique.dedup();
    unique.reverse();

    metrics
        .iter()
        .map(|m| {
            unique
                .iter()
                .position(|u| u == m)
                .expect("player metric missing from ranking set")
                + 1
        })
        .collect()
}
