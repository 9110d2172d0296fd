//! Fixture generation - single round-robin by the circle method
//!
//! Team 0 stays fixed while the others rotate one place per week. In each
//! week position `i` meets position `n - 1 - i`.

/// One scheduled pairing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixture<T> {
    /// 0-based week
    pub week: usize,
    pub home: T,
    pub away: T,
}

/// Number of weeks in a single round-robin for `n` teams (0 if `n` is odd)
pub fn weeks_for(n: usize) -> usize {
    if n % 2 != 0 || n == 0 {
        0
    } else {
        n - 1
    }
}

/// Generate a full single round-robin, ordered week by week.
///
/// An odd number of teams yields no fixtures; no bye is inserted.
pub fn generate_fixtures<T: Copy>(teams: &[T]) -> Vec<Fixture<T>> {
    let n = teams.len();
    let total_weeks = weeks_for(n);
    if total_weeks == 0 {
        return Vec::new();
    }

    let per_week = n / 2;
    let mut order = teams.to_vec();
    let mut fixtures = Vec::with_capacity(total_weeks * per_week);

    for week in 0..total_weeks {
        for i in 0..per_week {
            fixtures.push(Fixture {
                week,
                home: order[i],
                away: order[n - 1 - i],
            });
        }
        rotate(&mut order);
    }

    fixtures
}

/// Move position 1 to the end, shifting the rest left. Position 0 is fixed.
fn rotate<T>(order: &mut [T]) {
    if order.len() > 2 {
        order[1..].rotate_left(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pair(f: &Fixture<usize>) -> (usize, usize) {
        (f.home.min(f.away), f.home.max(f.away))
    }

    #[test]
    fn test_four_team_schedule() {
        let fixtures = generate_fixtures(&[0usize, 1, 2, 3]);
        let weeks: Vec<Vec<(usize, usize)>> = (0..3)
            .map(|w| {
                fixtures
                    .iter()
                    .filter(|f| f.week == w)
                    .map(|f| (f.home, f.away))
                    .collect()
            })
            .collect();

        assert_eq!(fixtures.len(), 6);
        assert_eq!(weeks[0], vec![(0, 3), (1, 2)]);
        assert_eq!(weeks[1], vec![(0, 1), (2, 3)]);
        assert_eq!(weeks[2], vec![(0, 2), (3, 1)]);
    }

    #[test]
    fn test_every_pair_exactly_once() {
        for n in (2..=20).step_by(2) {
            let teams: Vec<usize> = (0..n).collect();
            let fixtures = generate_fixtures(&teams);

            assert_eq!(fixtures.len(), n * (n - 1) / 2, "n = {}", n);

            let pairs: HashSet<(usize, usize)> = fixtures.iter().map(pair).collect();
            assert_eq!(pairs.len(), fixtures.len(), "duplicate pairing for n = {}", n);
            assert!(fixtures.iter().all(|f| f.home != f.away));
        }
    }

    #[test]
    fn test_weeks_partition_teams() {
        let n = 8;
        let teams: Vec<usize> = (0..n).collect();
        let fixtures = generate_fixtures(&teams);

        for week in 0..n - 1 {
            let in_week: Vec<_> = fixtures.iter().filter(|f| f.week == week).collect();
            assert_eq!(in_week.len(), n / 2);

            let mut seen = HashSet::new();
            for f in in_week {
                assert!(seen.insert(f.home));
                assert!(seen.insert(f.away));
            }
            assert_eq!(seen.len(), n);
        }
        assert!(fixtures.iter().all(|f| f.week < n - 1));
    }

    #[test]
    fn test_fixtures_ordered_by_week() {
        let teams: Vec<usize> = (0..6).collect();
        let fixtures = generate_fixtures(&teams);
        assert!(fixtures.windows(2).all(|w| w[0].week <= w[1].week));
    }

    #[test]
    fn test_odd_team_count_yields_nothing() {
        assert!(generate_fixtures(&[1, 2, 3]).is_empty());
        assert!(generate_fixtures(&[1]).is_empty());
        assert!(generate_fixtures::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_two_teams() {
        let fixtures = generate_fixtures(&["a", "b"]);
        assert_eq!(
            fixtures,
            vec![Fixture {
                week: 0,
                home: "a",
                away: "b"
            }]
        );
    }

    #[test]
    fn test_deterministic() {
        let teams: Vec<u32> = (10..20).collect();
        assert_eq!(generate_fixtures(&teams), generate_fixtures(&teams));
    }
}
