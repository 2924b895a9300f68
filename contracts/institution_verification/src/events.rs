use soroban_sdk::{symbol_short, Address, Env, String};

use crate::InstitutionRecord;

pub fn institution_verified(env: &Env, institution: &String, record: &InstitutionRecord) {
    env.events().publish(
        (symbol_short!("verified"), institution.clone()),
        (record.name.clone(), record.website.clone(), record.verified_at),
    );
}

pub fn verification_revoked(env: &Env, institution: &String) {
    env.events().publish(
        (symbol_short!("revoked"), institution.clone()),
        (),
    );
}

pub fn admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("admin"), previous.clone()),
        new_admin.clone(),
    );
}
