#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};

mod events;
mod storage;


/// Verification record kept for every institution the admin has verified.
///
/// Records are never removed. Revocation only clears `active`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InstitutionRecord {
    pub name: String,
    pub website: String,
    /// Ledger sequence at the time of verification.
    pub verified_at: u32,
    pub active: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AlreadyVerified = 100,
    Unauthorized = 403,
    NotFound = 404,
}

/// Admin-gated registry of verified institutions.
#[contract]
pub struct InstitutionVerification;

#[contractimpl]
impl InstitutionVerification {
    /// Set the registry admin. Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();

        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_admin(&env, &admin);
        storage::extend_instance(&env);
        Ok(())
    }

    // ========================================================================
    // Verification
    // ========================================================================

    /// Record `institution` as verified at the current ledger sequence.
    ///
    /// Fails with `AlreadyVerified` if the institution has any record,
    /// including a revoked one.
    pub fn verify_institution(
        env: Env,
        caller: Address,
        institution: String,
        name: String,
        website: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        if storage::has_institution(&env, &institution) {
            return Err(ContractError::AlreadyVerified);
        }

        let record = InstitutionRecord {
            name,
            website,
            verified_at: env.ledger().sequence(),
            active: true,
        };
        storage::set_institution(&env, &institution, &record);
        events::institution_verified(&env, &institution, &record);

        Ok(())
    }

    /// Mark an existing verification as inactive.
    pub fn revoke_verification(
        env: Env,
        caller: Address,
        institution: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        let mut record = storage::get_institution(&env, &institution)
            .ok_or(ContractError::NotFound)?;
        record.active = false;
        storage::set_institution(&env, &institution, &record);
        events::verification_revoked(&env, &institution);

        Ok(())
    }

    /// Current active flag of `institution`.
    pub fn is_verified(env: Env, institution: String) -> Result<bool, ContractError> {
        storage::extend_instance(&env);

        storage::get_institution(&env, &institution)
            .map(|record| record.active)
            .ok_or(ContractError::NotFound)
    }

    /// Get the full verification record of `institution`.
    pub fn get_institution(
        env: Env,
        institution: String,
    ) -> Result<InstitutionRecord, ContractError> {
        storage::extend_instance(&env);

        storage::get_institution(&env, &institution)
            .ok_or(ContractError::NotFound)
    }

    // ========================================================================
    // Admin Functions
    // ========================================================================

    /// Hand admin rights to `new_admin`.
    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        storage::extend_instance(&env);

        storage::set_admin(&env, &new_admin);
        events::admin_transferred(&env, &caller, &new_admin);

        Ok(())
    }

    /// Get the current admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::extend_instance(&env);

        storage::get_admin(&env)
            .ok_or(ContractError::NotInitialized)
    }

    /// Contract interface version
    pub fn version(_env: Env) -> u32 {
        1
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        let admin = storage::get_admin(env)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }

        Ok(())
    }
}
