use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use employee_functions::db::EmployeeStore;
use employee_functions::errors::{PublishError, StoreError};
use employee_functions::models::employee::Employee;
use employee_functions::utils::event_grid::EventPublisher;

#[derive(Default)]
pub struct FakeStore {
    records: Mutex<HashMap<String, Employee>>,
    pub inserts: AtomicUsize,
    pub reads: AtomicUsize,
    pub upserts: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FakeStore {
    pub fn with(employee: Employee) -> Self {
        let store = FakeStore::default();
        store
            .records
            .lock()
            .unwrap()
            .insert(employee.id.clone(), employee);
        store
    }

    pub fn get(&self, id: &str) -> Option<Employee> {
        self.records.lock().unwrap().get(id).cloned()
    }

    pub fn all(&self) -> Vec<Employee> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeStore for FakeStore {
    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Database("connection reset".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&employee.id) {
            return Err(StoreError::Database("duplicate id".to_string()));
        }
        records.insert(employee.id.clone(), employee.clone());
        Ok(())
    }

    async fn read_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Database("connection reset".to_string()));
        }
        Ok(self.get(id))
    }

    async fn upsert(&self, employee: &Employee) -> Result<(), StoreError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Database("connection reset".to_string()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(employee.id.clone(), employee.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvent {
    pub subject: String,
    pub event_type: String,
    pub data_version: String,
    pub payload: String,
}

#[derive(Default)]
pub struct FakePublisher {
    events: Mutex<Vec<PublishedEvent>>,
    pub fail: AtomicBool,
}

impl FakePublisher {
    pub fn events(&self) -> Vec<PublishedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for FakePublisher {
    async fn publish(
        &self,
        subject: &str,
        event_type: &str,
        data_version: &str,
        payload: &str,
    ) -> Result<(), PublishError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PublishError::Rejected {
                status: 401,
                body: "invalid key".to_string(),
            });
        }
        self.events.lock().unwrap().push(PublishedEvent {
            subject: subject.to_string(),
            event_type: event_type.to_string(),
            data_version: data_version.to_string(),
            payload: payload.to_string(),
        });
        Ok(())
    }
}

pub fn employee(id: &str, email: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        birthday_in_epoch: "631152000".to_string(),
        email: email.to_string(),
    }
}
