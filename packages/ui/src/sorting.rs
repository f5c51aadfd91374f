use std::cmp::Ordering;

use api::UserRecord;

/// Column the user table can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    Email,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Local, non-persisted sort state of the user table. Starts as name ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// State after clicking the `field` column header.
    ///
    /// The active column flips direction; any other column becomes active, ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Header arrow for `field`, if it is the active column.
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        if self.field != field {
            return None;
        }
        Some(match self.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        })
    }

    /// A sorted copy of `users`. Equal keys keep their incoming order.
    pub fn apply(&self, users: &[UserRecord]) -> Vec<UserRecord> {
        let mut sorted = users.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }

    fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Email => a.email.cmp(&b.email),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserId;

    fn user(id: u64, name: &str, email: &str) -> UserRecord {
        UserRecord {
            id: UserId::from(id),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn users() -> Vec<UserRecord> {
        vec![
            user(1, "Rahul Verma", "rahul@example.com"),
            user(2, "Amit Sharma", "zz.amit@example.com"),
            user(3, "Priya Singh", "priya@example.com"),
            user(4, "Amit Sharma", "amit@example.com"),
        ]
    }

    fn names(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_default_is_name_ascending() {
        let sorted = SortState::default().apply(&users());
        assert_eq!(
            names(&sorted),
            vec!["Amit Sharma", "Amit Sharma", "Priya Singh", "Rahul Verma"]
        );
        // Equal names keep the incoming order.
        assert_eq!(sorted[0].id, UserId::from(2));
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let state = SortState::default().toggled(SortField::Name);
        assert_eq!(state.direction, SortDirection::Descending);
        assert_eq!(state.indicator(SortField::Name), Some("↓"));
        assert_eq!(state.indicator(SortField::Email), None);

        let sorted = state.apply(&users());
        assert_eq!(sorted[0].name, "Rahul Verma");
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let state = SortState::default()
            .toggled(SortField::Name)
            .toggled(SortField::Email);
        assert_eq!(state.field, SortField::Email);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_email_descending_then_back_matches_initial_ascending() {
        let data = users();
        let ascending = SortState::default().toggled(SortField::Email);
        let descending = ascending.toggled(SortField::Email);
        let back = descending.toggled(SortField::Email);

        let first = ascending.apply(&data);
        let desc = descending.apply(&data);
        assert_eq!(desc.first().map(|u| u.email.as_str()), Some("zz.amit@example.com"));
        assert_eq!(back, ascending);
        assert_eq!(back.apply(&desc), first);
    }
}
