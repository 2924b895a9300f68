use soroban_sdk::{contracttype, Address, Env, String};

use crate::InstitutionRecord;

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Institution(String),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_institution(env: &Env, institution: &String) -> Option<InstitutionRecord> {
    let key = DataKey::Institution(institution.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_record(env, &key);
    }
    record
}

pub fn set_institution(env: &Env, institution: &String, record: &InstitutionRecord) {
    let key = DataKey::Institution(institution.clone());
    env.storage().persistent().set(&key, record);
    extend_record(env, &key);
}

pub fn has_institution(env: &Env, institution: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Institution(institution.clone()))
}

fn extend_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
