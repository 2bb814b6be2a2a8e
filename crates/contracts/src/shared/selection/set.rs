use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Набор выбранных идентификаторов строк
///
/// Хранит только выбранные id: отсутствие ключа означает "не выбрано",
/// поэтому множество ключей всегда совпадает с множеством выбранных строк.
/// Сериализуется в форму `{ "<id>": true }`, записи со значением `false`
/// при десериализации отбрасываются.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Выбранные id. Порядок не определён.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Переключает один id: удаляет, если выбран, иначе добавляет.
    /// Возвращает новое состояние строки.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn insert_many<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
    }

    pub fn remove_many<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.ids.remove(id.as_ref());
        }
    }
}

impl From<BTreeMap<String, bool>> for SelectionSet {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self {
            ids: map
                .into_iter()
                .filter_map(|(id, selected)| selected.then_some(id))
                .collect(),
        }
    }
}

impl From<SelectionSet> for BTreeMap<String, bool> {
    fn from(set: SelectionSet) -> Self {
        set.ids.into_iter().map(|id| (id, true)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
