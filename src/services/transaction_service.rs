//! Transaction service - Core business logic for deposits and transfers.
//!
//! This service handles:
//! - Resolving the admin, sender and recipient parties
//! - Validating the business rules in a fixed order
//! - Applying balance updates and persisting them
//! - Recording the transaction and expanding its party references
//!
//! # Consistency
//!
//! Reads and writes are independent store calls. Nothing is locked and a
//! failed write does not roll back the ones before it, so concurrent calls
//! touching the same users can race.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::transaction::{
    NewTransaction, Transaction, TransactionRequest, TransactionResponse, TransactionType,
};
use crate::models::user::User;
use crate::store::WalletStore;

/// Smallest amount a transfer may move.
pub const MIN_TRANSFER_AMOUNT: i64 = 50;

/// Transfers of at least this amount pay `TRANSFER_FEE`.
pub const FEE_THRESHOLD: i64 = 100;

/// Flat fee credited to the admin on qualifying transfers.
pub const TRANSFER_FEE: i64 = 5;

/// Fee charged on a transfer of `amount`.
pub fn transfer_fee(amount: i64) -> i64 {
    if amount >= FEE_THRESHOLD {
        TRANSFER_FEE
    } else {
        0
    }
}

/// Where the service finds the admin party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSource {
    /// A fixed user id; the user must still hold the admin role.
    Id(Uuid),
    /// Whichever user holds the admin role.
    Role,
}

/// Deposit and transfer operations over a `WalletStore`.
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn WalletStore>,
    admin: AdminSource,
}

impl TransactionService {
    pub fn new(store: Arc<dyn WalletStore>, admin: AdminSource) -> Self {
        Self { store, admin }
    }

    /// Fetch a fresh copy of the admin.
    ///
    /// # Errors
    ///
    /// - `Forbidden`: no admin exists (or the configured id is not an admin)
    async fn resolve_admin(&self) -> Result<User, AppError> {
        let admin = match self.admin {
            AdminSource::Id(id) => self
                .store
                .find_user_by_id(id)
                .await?
                .filter(User::is_admin),
            AdminSource::Role => self.store.find_admin().await?,
        };

        admin.ok_or_else(|| AppError::Forbidden("Admin not found".to_string()))
    }

    /// Credit a user's wallet on behalf of the admin.
    ///
    /// # Process
    ///
    /// 1. Resolve the admin
    /// 2. Resolve sender and recipient by id
    /// 3. Check the recipient may receive money
    /// 4. Check the declared type (after the recipient checks)
    /// 5. Credit the recipient and the admin's deposit total
    /// 6. Record the transaction
    ///
    /// A missing sender is tolerated: the record keeps the given id and the
    /// response carries `user: null`.
    ///
    /// # Errors
    ///
    /// - `Forbidden`: no admin, or recipient unverified, blocked, not a
    ///   regular user, or sharing the sender's phone number
    /// - `NotFound`: recipient missing
    /// - `BadRequest`: declared type is not `deposit`
    /// - `Database`: store error
    #[tracing::instrument(skip(self, request), fields(user = %request.user, amount = request.amount))]
    pub async fn create_deposit(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        let mut admin = self.resolve_admin().await?;

        let sender = self.store.find_user_by_id(request.user).await?;
        let recipient = match request.recipient {
            Some(id) => self.store.find_user_by_id(id).await?,
            None => None,
        };

        let mut recipient = check_recipient(
            recipient,
            sender.as_ref(),
            "You cannot deposit to yourself",
        )
        .inspect_err(|e| tracing::warn!(reason = %e, "deposit rejected"))?;

        if !TransactionType::Deposit.matches(&request.transaction_type) {
            tracing::warn!(declared = %request.transaction_type, "deposit rejected: wrong type");
            return Err(AppError::BadRequest("Invalid transaction type".to_string()));
        }

        // All new values are computed before the first save.
        recipient.balance = credit(recipient.balance, request.amount)?;
        admin.total_money = credit(admin.total_money, request.amount)?;
        self.store.save_user(&recipient).await?;
        self.store.save_user(&admin).await?;

        let transaction = self
            .store
            .create_transaction(NewTransaction {
                transaction_type: request.transaction_type,
                amount: request.amount,
                user_id: request.user,
                recipient_id: recipient.id,
                recipient_number: request.recipient_number,
            })
            .await?;

        tracing::info!(transaction_id = %transaction.id, recipient = %recipient.id, "deposit completed");

        self.populate(transaction).await
    }

    /// Move money between two users, charging the tiered fee.
    ///
    /// # Process
    ///
    /// 1. Resolve the admin
    /// 2. Check the declared type and the minimum amount
    /// 3. Resolve the sender by id and the recipient by phone number
    /// 4. Check the recipient may receive money
    /// 5. Check the sender covers amount plus fee
    /// 6. Debit the sender, credit the recipient, credit the fee to the admin
    /// 7. Record the transaction against the resolved recipient
    ///
    /// # Errors
    ///
    /// - `Forbidden`: no admin, or recipient unverified, blocked, not a
    ///   regular user, or sharing the sender's phone number
    /// - `BadRequest`: wrong type, amount below minimum, insufficient funds
    /// - `NotFound`: sender or recipient missing
    /// - `Database`: store error
    #[tracing::instrument(skip(self, request), fields(user = %request.user, amount = request.amount))]
    pub async fn create_transfer(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        let mut admin = self.resolve_admin().await?;

        if !TransactionType::Transfer.matches(&request.transaction_type) {
            return Err(AppError::BadRequest("Invalid transaction type".to_string()));
        }
        if request.amount < MIN_TRANSFER_AMOUNT {
            return Err(AppError::BadRequest(format!(
                "Transfer amount must be greater than {MIN_TRANSFER_AMOUNT}"
            )));
        }

        let mut sender = self
            .store
            .find_user_by_id(request.user)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let recipient = match request.recipient_number.as_deref() {
            Some(phone_number) => self.store.find_user_by_phone(phone_number).await?,
            None => None,
        };
        let mut recipient =
            check_recipient(recipient, Some(&sender), "You cannot transfer to yourself")
                .inspect_err(|e| tracing::warn!(reason = %e, "transfer rejected"))?;

        let fee = transfer_fee(request.amount);
        // No balance can cover an amount plus fee beyond i64::MAX.
        let required = match request.amount.checked_add(fee) {
            Some(required) if sender.balance >= required => required,
            _ => {
                tracing::warn!(balance = sender.balance, fee, "transfer rejected: insufficient funds");
                return Err(AppError::BadRequest("Insufficient funds".to_string()));
            }
        };

        sender.balance -= required;
        recipient.balance = credit(recipient.balance, request.amount)?;
        admin.balance = credit(admin.balance, fee)?;

        // Each save overwrites the whole balance; the admin is saved last.
        self.store.save_user(&sender).await?;
        self.store.save_user(&recipient).await?;
        self.store.save_user(&admin).await?;

        let transaction = self
            .store
            .create_transaction(NewTransaction {
                transaction_type: request.transaction_type,
                amount: request.amount,
                user_id: sender.id,
                recipient_id: recipient.id,
                recipient_number: request.recipient_number,
            })
            .await?;

        tracing::info!(transaction_id = %transaction.id, recipient = %recipient.id, fee, "transfer completed");

        self.populate(transaction).await
    }

    /// Get a transaction by ID with its parties expanded.
    pub async fn get_transaction(
        &self,
        transaction_id: Uuid,
    ) -> Result<Option<TransactionResponse>, AppError> {
        match self.store.find_transaction(transaction_id).await? {
            Some(transaction) => Ok(Some(self.populate(transaction).await?)),
            None => Ok(None),
        }
    }

    async fn populate(&self, transaction: Transaction) -> Result<TransactionResponse, AppError> {
        let user = self.store.find_user_by_id(transaction.user_id).await?;
        let recipient = self.store.find_user_by_id(transaction.recipient_id).await?;

        Ok(TransactionResponse::populate(transaction, user, recipient))
    }
}

/// Add `amount` to a stored balance, rejecting results beyond `i64::MAX`.
fn credit(balance: i64, amount: i64) -> Result<i64, AppError> {
    balance.checked_add(amount).ok_or_else(|| {
        tracing::warn!(balance, amount, "rejected: balance limit exceeded");
        AppError::BadRequest("Balance limit exceeded".to_string())
    })
}

/// Recipient checks shared by deposits and transfers, in order.
///
/// The self-transaction check compares phone numbers and is skipped when
/// there is no sender.
fn check_recipient(
    recipient: Option<User>,
    sender: Option<&User>,
    self_message: &str,
) -> Result<User, AppError> {
    let recipient =
        recipient.ok_or_else(|| AppError::NotFound("Recipient not found".to_string()))?;

    if !recipient.is_verified {
        return Err(AppError::Forbidden("Recipient is not verified".to_string()));
    }
    if recipient.is_blocked {
        return Err(AppError::Forbidden("Recipient is blocked".to_string()));
    }
    if !recipient.is_regular_user() {
        return Err(AppError::Forbidden("This is not a user".to_string()));
    }
    if sender.is_some_and(|s| s.phone_number == recipient.phone_number) {
        return Err(AppError::Forbidden(self_message.to_string()));
    }

    Ok(recipient)
}
