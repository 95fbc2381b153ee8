//! Open-SPR filtering and per-user SPR statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Resolution, Spr, User};

/// Open SPR count for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSprCount {
    pub user: User,
    pub count: usize,
}

/// Share of all SPRs owned by one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprShare {
    pub total: usize,
    pub total_user: usize,
    /// Rounded to the nearest whole percent
    pub percentage: u32,
}

/// Keeps the SPRs that are still open, in their original order.
pub fn filter_open<I>(sprs: I) -> Vec<Spr>
where
    I: IntoIterator<Item = Spr>,
{
    sprs.into_iter().filter(Spr::is_open).collect()
}

/// Counts open SPRs per user id.
///
/// Every user in `users` appears in the result, starting at zero. SPRs with no
/// owner, or owned by someone outside `users`, are not counted.
pub fn tally_open_by_user(sprs: &[Spr], users: &[User]) -> BTreeMap<i64, usize> {
    let mut tally: BTreeMap<i64, usize> = users
        .iter()
        .filter_map(|user| user.id)
        .map(|id| (id, 0))
        .collect();

    for spr in sprs.iter().filter(|spr| spr.is_open()) {
        if let Some(count) = spr.user_id.and_then(|id| tally.get_mut(&id)) {
            *count += 1;
        }
    }

    tally
}

/// Pairs each user with their open SPR count, in the order of `users`.
pub fn open_counts_by_user(sprs: &[Spr], users: &[User]) -> Vec<UserSprCount> {
    let tally = tally_open_by_user(sprs, users);

    users
        .iter()
        .map(|user| UserSprCount {
            user: user.clone(),
            count: user
                .id
                .and_then(|id| tally.get(&id).copied())
                .unwrap_or_default(),
        })
        .collect()
}

/// Number of reviewed SPRs owned by `user_id`.
pub fn reviewed_count_for_user(sprs: &[Spr], user_id: i64) -> usize {
    sprs.iter()
        .filter(|spr| {
            spr.user_id == Some(user_id) && spr.resolution == Some(Resolution::Reviewed)
        })
        .count()
}

/// Portion of `sprs` owned by `user_id`. An empty list yields zero percent.
pub fn user_share(sprs: &[Spr], user_id: i64) -> SprShare {
    let total = sprs.len();
    let total_user = sprs.iter().filter(|spr| spr.user_id == Some(user_id)).count();
    let percentage = if total == 0 {
        0
    } else {
        ((total_user as f64 / total as f64) * 100.0).round() as u32
    };

    SprShare {
        total,
        total_user,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Territory;

    fn user(id: i64, login: &str) -> User {
        User {
            id: Some(id),
            login: login.to_string(),
            first_name: None,
            last_name: None,
            email: None,
            activated: true,
        }
    }

    fn spr(number: i32, resolution: Option<Resolution>, user_id: Option<i64>) -> Spr {
        Spr {
            id: Some(number as i64),
            territory: Territory::Chicago,
            number,
            full_number: format!("CHI-{}", number),
            description: None,
            priority: None,
            resolution,
            jira_link: None,
            reviewer_id: None,
            user_id,
            release_id: None,
        }
    }

    #[test]
    fn test_filter_open_keeps_unresolved_work() {
        let sprs = vec![
            spr(1, Some(Resolution::New), None),
            spr(2, Some(Resolution::Fixed), None),
            spr(3, Some(Resolution::PartiallyFixed), None),
            spr(4, Some(Resolution::Reviewed), None),
        ];

        let open = filter_open(sprs);
        let numbers: Vec<i32> = open.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_filter_open_counts_missing_resolution_as_open() {
        let open = filter_open(vec![spr(7, None, None)]);
        assert_eq!(open.len(), 1);
    }

    #[test]
    fn test_filter_open_empty() {
        assert!(filter_open(Vec::new()).is_empty());
    }

    #[test]
    fn test_tally_lists_every_user() {
        let users = vec![user(1, "a"), user(2, "b")];
        let sprs = vec![
            spr(1, Some(Resolution::New), Some(1)),
            spr(2, Some(Resolution::Fixed), Some(1)),
        ];

        let tally = tally_open_by_user(&sprs, &users);
        assert_eq!(tally.get(&1), Some(&1));
        assert_eq!(tally.get(&2), Some(&0));
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_tally_ignores_unknown_and_unowned() {
        let users = vec![user(1, "a")];
        let sprs = vec![
            spr(1, Some(Resolution::New), Some(99)),
            spr(2, None, None),
        ];

        let tally = tally_open_by_user(&sprs, &users);
        assert_eq!(tally.get(&1), Some(&0));
        assert!(!tally.contains_key(&99));
    }

    #[test]
    fn test_open_counts_preserve_user_order() {
        let users = vec![user(2, "b"), user(1, "a")];
        let sprs = vec![
            spr(1, None, Some(1)),
            spr(2, Some(Resolution::Duplicate), Some(1)),
        ];

        let counts = open_counts_by_user(&sprs, &users);
        assert_eq!(counts[0].user.login, "b");
        assert_eq!(counts[0].count, 0);
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn test_reviewed_count_for_user() {
        let sprs = vec![
            spr(1, Some(Resolution::Reviewed), Some(1)),
            spr(2, Some(Resolution::Reviewed), Some(2)),
            spr(3, Some(Resolution::Reviewed), Some(1)),
        ];
        assert_eq!(reviewed_count_for_user(&sprs, 1), 2);
        assert_eq!(reviewed_count_for_user(&sprs, 3), 0);
    }

    #[test]
    fn test_user_share() {
        let sprs = vec![
            spr(1, None, Some(1)),
            spr(2, None, Some(2)),
            spr(3, None, Some(2)),
        ];
        let share = user_share(&sprs, 1);
        assert_eq!(share.total, 3);
        assert_eq!(share.total_user, 1);
        assert_eq!(share.percentage, 33);
        assert_eq!(user_share(&sprs, 2).percentage, 67);
    }

    #[test]
    fn test_user_share_without_sprs() {
        let share = user_share(&[], 1);
        assert_eq!(share.percentage, 0);
        assert_eq!(share.total, 0);
    }
}
