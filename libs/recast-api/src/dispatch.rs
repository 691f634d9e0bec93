use crate::converter::Dialect;
use crate::error::ConvertError;

/// Immutable, array-backed map from a dialect's native type code to an adapter.
///
/// Vendor type codes are small and bounded (Oracle < 256, PostgreSQL
/// built-in OIDs < 4096), so a sparse slot array gives O(1) lookup without
/// hashing. Codes that are negative or beyond the last registered slot are
/// simply unmapped.
#[derive(Debug)]
pub struct DispatchTable<A> {
    dialect: Dialect,
    slots: Box<[Option<A>]>,
}

impl<A: Copy> DispatchTable<A> {
    /// Build a table from `(code, adapter)` pairs. A code listed twice keeps
    /// the last adapter.
    pub fn from_entries(dialect: Dialect, entries: &[(u16, A)]) -> Self {
        let len = entries
            .iter()
            .map(|(code, _)| usize::from(*code) + 1)
            .max()
            .unwrap_or(0);
        let mut slots = vec![None; len].into_boxed_slice();
        for (code, adapter) in entries {
            slots[usize::from(*code)] = Some(*adapter);
        }
        Self { dialect, slots }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn get(&self, code: i32) -> Option<A> {
        let idx = usize::try_from(code).ok()?;
        self.slots.get(idx).copied().flatten()
    }

    /// Like [`get`](Self::get), but an unmapped code is an explicit error.
    pub fn lookup(&self, code: i32) -> Result<A, ConvertError> {
        self.get(code).ok_or(ConvertError::UnknownTypeCode {
            dialect: self.dialect,
            code,
        })
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(idx, _)| idx as i32)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Text,
        Number,
    }

    fn table() -> DispatchTable<Kind> {
        DispatchTable::from_entries(
            Dialect::Oracle,
            &[(1, Kind::Text), (2, Kind::Number), (96, Kind::Text)],
        )
    }

    #[test]
    fn test_lookup_registered() {
        let t = table();
        assert_eq!(t.get(2), Some(Kind::Number));
        assert_eq!(t.lookup(96).unwrap(), Kind::Text);
        assert_eq!(t.len(), 3);
        assert_eq!(t.codes().collect::<Vec<_>>(), vec![1, 2, 96]);
    }

    #[test]
    fn test_unmapped_codes_are_errors() {
        let t = table();
        for code in [0, 3, 95, 97, 4096, -1, i32::MIN, i32::MAX] {
            assert_eq!(t.get(code), None);
            assert_eq!(
                t.lookup(code).unwrap_err(),
                ConvertError::UnknownTypeCode {
                    dialect: Dialect::Oracle,
                    code
                }
            );
        }
    }

    #[test]
    fn test_last_registration_wins() {
        let t = DispatchTable::from_entries(Dialect::MySql, &[(5, Kind::Text), (5, Kind::Number)]);
        assert_eq!(t.get(5), Some(Kind::Number));
        assert_eq!(t.len(), 1);
    }
}
