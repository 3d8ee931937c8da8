use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::{Mutex, MutexGuard};

// used for the calendar date attached to every demand figure
use chrono::NaiveDate;
// fast hashing since record ids are plain integers
use seahash::SeaHasher;
use serde::Serialize;

use crate::error::{GridbookError, Result};

// ------------- RecordId -------------
pub type RecordId = u64;

pub type RecordHasher = BuildHasherDefault<SeaHasher>;

pub const GENESIS: RecordId = 0;

#[derive(Debug)]
pub struct RecordIdGenerator {
    lower_bound: RecordId,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self {
            lower_bound: GENESIS,
        }
    }
    // Ids are handed out pre-incremented, so the first one is 1.
    // Deleted ids are never released back for reuse.
    pub fn generate(&mut self) -> RecordId {
        self.lower_bound += 1;
        self.lower_bound
    }
    pub fn lower_bound(&self) -> RecordId {
        self.lower_bound
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Record -------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: RecordId,
    date: NaiveDate,
    demand_gwh: f64,
}

impl Record {
    pub fn new(id: RecordId, date: NaiveDate, demand_gwh: f64) -> Self {
        Self {
            id,
            date,
            demand_gwh,
        }
    }
    // It's intentional to encapsulate the fields in the struct
    // and only expose them using "getters", because this yields
    // true immutability for objects outside the keeper.
    pub fn id(&self) -> RecordId {
        self.id
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn demand_gwh(&self) -> f64 {
        self.demand_gwh
    }
}

#[derive(Debug)]
pub struct RecordKeeper {
    kept: HashMap<RecordId, Record, RecordHasher>,
}

impl RecordKeeper {
    pub fn new() -> Self {
        Self {
            kept: HashMap::default(),
        }
    }
    pub fn keep(&mut self, record: Record) -> Record {
        let keepsake = record.clone();
        self.kept.insert(record.id, record);
        keepsake
    }
    pub fn get(&self, id: RecordId) -> Result<Record> {
        self.kept
            .get(&id)
            .cloned()
            .ok_or(GridbookError::NotFound { id })
    }
    pub fn get_mut(&mut self, id: RecordId) -> Result<&mut Record> {
        self.kept
            .get_mut(&id)
            .ok_or(GridbookError::NotFound { id })
    }
    pub fn remove(&mut self, id: RecordId) -> Result<()> {
        self.kept
            .remove(&id)
            .map(|_| ())
            .ok_or(GridbookError::NotFound { id })
    }
    // Enumeration returns ascending id order, which coincides with insertion
    // order since ids are assigned monotonically at insert.
    pub fn all(&self) -> Vec<Record> {
        let mut records: Vec<Record> = self.kept.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        records
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

impl Default for RecordKeeper {
    fn default() -> Self {
        Self::new()
    }
}

// This sets up the ledger with the necessary structures
#[derive(Debug)]
pub struct Ledger {
    // owns an id generator and a keeper for the records,
    // guarded together so every operation is one critical section
    inner: Mutex<LedgerInner>,
}

#[derive(Debug)]
struct LedgerInner {
    id_generator: RecordIdGenerator,
    record_keeper: RecordKeeper,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LedgerInner {
                id_generator: RecordIdGenerator::new(),
                record_keeper: RecordKeeper::new(),
            }),
        }
    }

    fn inner(&self) -> Result<MutexGuard<'_, LedgerInner>> {
        self.inner
            .lock()
            .map_err(|e| GridbookError::Lock(e.to_string()))
    }

    /// Assigns the next id and stores the record. Fails only on a poisoned lock.
    pub fn insert(&self, date: NaiveDate, demand_gwh: f64) -> Result<Record> {
        let mut inner = self.inner()?;
        let id = inner.id_generator.generate();
        Ok(inner.record_keeper.keep(Record::new(id, date, demand_gwh)))
    }

    /// All current records in ascending id order.
    pub fn all(&self) -> Result<Vec<Record>> {
        Ok(self.inner()?.record_keeper.all())
    }

    pub fn get(&self, id: RecordId) -> Result<Record> {
        self.inner()?.record_keeper.get(id)
    }

    /// Overwrites both fields of an existing record, id unchanged.
    pub fn replace(&self, id: RecordId, date: NaiveDate, demand_gwh: f64) -> Result<Record> {
        let mut inner = self.inner()?;
        let record = inner.record_keeper.get_mut(id)?;
        record.date = date;
        record.demand_gwh = demand_gwh;
        Ok(record.clone())
    }

    /// Overwrites only the demand figure when one is given. An absent value
    /// means no change was requested and the record comes back untouched.
    pub fn patch(&self, id: RecordId, demand_gwh: Option<f64>) -> Result<Record> {
        let mut inner = self.inner()?;
        let record = inner.record_keeper.get_mut(id)?;
        if let Some(demand_gwh) = demand_gwh {
            record.demand_gwh = demand_gwh;
        }
        Ok(record.clone())
    }

    /// Removes the record permanently. Its id is never handed out again.
    pub fn delete(&self, id: RecordId) -> Result<()> {
        self.inner()?.record_keeper.remove(id)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.inner()?.record_keeper.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.inner()?.record_keeper.is_empty())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
