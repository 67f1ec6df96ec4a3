use crate::types::connection::Stage;

impl Stage {
    pub fn points(self) -> u32 {
        match self {
            Stage::Stalled => 0,
            Stage::Matched => 5,
            Stage::Messaging => 10,
            Stage::ContactExchanged => 15,
            Stage::DatePlanning => 18,
            Stage::FirstDate => 20,
            Stage::Dating => 25,
            Stage::Exclusive => 30,
        }
    }
}

/// Unknown labels count as no progress.
pub fn stage_score(label: &str) -> u32 {
    Stage::from_label(label).map_or(0, Stage::points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_fixed_points() {
        let expected = [
            ("停滞中", 0),
            ("マッチング直後", 5),
            ("メッセージ中", 10),
            ("LINE交換済み", 15),
            ("デート調整中", 18),
            ("デート1回目", 20),
            ("デート2回目以降", 25),
            ("交際中", 30),
        ];
        for (label, points) in expected {
            assert_eq!(stage_score(label), points, "label {label}");
        }
    }

    #[test]
    fn unknown_labels_score_zero() {
        assert_eq!(stage_score(""), 0);
        assert_eq!(stage_score("婚約中"), 0);
        assert_eq!(stage_score("交際中 (仮)"), 0);
    }

    #[test]
    fn aliases_share_the_label_points() {
        assert_eq!(stage_score("exclusive"), stage_score("交際中"));
        assert_eq!(stage_score("first-date"), 20);
    }
}
