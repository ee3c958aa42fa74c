/// Sort order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl Order {
    /// Normalize a direction query value.
    ///
    /// Matching is case insensitive; `desc` and `descending` select
    /// [Order::Desc] and everything else, including unrecognized values,
    /// falls back to ascending.
    ///
    /// # Examples
    /// ```
    /// use person_record_sort::order::Order;
    /// assert_eq!(Order::from_direction("DESC"), Order::Desc);
    /// assert_eq!(Order::from_direction("sideways"), Order::Asc);
    /// ```
    pub fn from_direction(direction: &str) -> Order {
        match direction.to_ascii_lowercase().as_str() {
            "desc" | "descending" => Order::Desc,
            _ => Order::Asc,
        }
    }
}

impl Default for Order {
    fn default() -> Order {
        Order::Asc
    }
}
