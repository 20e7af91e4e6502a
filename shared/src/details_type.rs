use serde::{Deserialize, Serialize};

/// Which side of the ledger the surrounding view is showing details for.
///
/// The widget receives this as `Option<DetailsType>`; `None` means nothing is
/// selected and every bar is drawn at full strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailsType {
    /// Money added to the account
    MoneyIn,
    /// Money spent from the account
    MoneyOut,
}

impl DetailsType {
    /// Human-readable label for selector buttons
    pub fn label(&self) -> &'static str {
        match self {
            DetailsType::MoneyIn => "Money In",
            DetailsType::MoneyOut => "Money Out",
        }
    }
}

/// The three bars of the chart, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarKind {
    MoneyIn,
    MoneyOut,
    Balance,
}

impl BarKind {
    pub const ALL: [BarKind; 3] = [BarKind::MoneyIn, BarKind::MoneyOut, BarKind::Balance];

    /// Position of this bar in paint order (and in `ChartConfig::bars`)
    pub fn index(&self) -> usize {
        match self {
            BarKind::MoneyIn => 0,
            BarKind::MoneyOut => 1,
            BarKind::Balance => 2,
        }
    }

    /// Whether this bar stays at full strength under the given selection.
    ///
    /// The balance bar is only emphasized when nothing is selected.
    pub fn is_emphasized(&self, selection: Option<DetailsType>) -> bool {
        match (self, selection) {
            (_, None) => true,
            (BarKind::MoneyIn, Some(DetailsType::MoneyIn)) => true,
            (BarKind::MoneyOut, Some(DetailsType::MoneyOut)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_type_wire_format() {
        assert_eq!(serde_json::to_string(&DetailsType::MoneyIn).unwrap(), "\"moneyIn\"");
        assert_eq!(serde_json::to_string(&DetailsType::MoneyOut).unwrap(), "\"moneyOut\"");

        let none: Option<DetailsType> = serde_json::from_str("null").unwrap();
        assert_eq!(none, None);
        let some: Option<DetailsType> = serde_json::from_str("\"moneyOut\"").unwrap();
        assert_eq!(some, Some(DetailsType::MoneyOut));
    }

    #[test]
    fn test_unknown_details_type_rejected() {
        assert!(serde_json::from_str::<DetailsType>("\"balance\"").is_err());
    }

    #[test]
    fn test_emphasis_with_nothing_selected() {
        for kind in BarKind::ALL {
            assert!(kind.is_emphasized(None), "{:?} should be emphasized", kind);
        }
    }

    #[test]
    fn test_emphasis_follows_selection() {
        let money_in = Some(DetailsType::MoneyIn);
        assert!(BarKind::MoneyIn.is_emphasized(money_in));
        assert!(!BarKind::MoneyOut.is_emphasized(money_in));
        assert!(!BarKind::Balance.is_emphasized(money_in));

        let money_out = Some(DetailsType::MoneyOut);
        assert!(!BarKind::MoneyIn.is_emphasized(money_out));
        assert!(BarKind::MoneyOut.is_emphasized(money_out));
        assert!(!BarKind::Balance.is_emphasized(money_out));
    }

    #[test]
    fn test_bar_indices_match_paint_order() {
        let indices: Vec<usize> = BarKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
