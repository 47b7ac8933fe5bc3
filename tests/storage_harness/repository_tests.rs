//! Macro-generated test suite for `ProjectRepository` contract validation.
//!
//! The `project_repository_tests!` macro generates a test module that
//! validates any `ProjectRepository` implementation against the full
//! contract: key assignment, owner listings, installment ownership, sparse
//! updates, cascades and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use freelas::storage::InMemoryProjectRepository;
//!
//! project_repository_tests!(InMemoryProjectRepository::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Customers
//! - `test_insert_and_find_customer` - insert then find, verify all fields
//! - `test_find_missing_customer` - unknown key returns None
//! - `test_list_customers_by_owner` - only the owner's customers are listed
//! - `test_update_customer` - rename persists
//! - `test_update_missing_customer` - unknown key returns Err
//!
//! ## Projects
//! - `test_insert_freela_with_installments` - installments get keys and back references
//! - `test_insert_freela_for_missing_customer` - rejected
//! - `test_list_freelas_by_owner` - only the owner's projects are listed
//! - `test_update_freela_keeps_installments` - scalar fields only
//! - `test_update_missing_freela` - unknown key returns Err
//! - `test_delete_freela` - project and installments disappear
//! - `test_delete_customer_cascades` - projects of the customer disappear
//!
//! ## Edge Cases
//! - `test_concurrent_inserts` - parallel inserts get distinct keys

/// Generate a full `ProjectRepository` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an empty repository.
/// It is re-evaluated for each test to ensure isolation. For the concurrent
/// test, the returned repository must also implement `Clone + 'static`
/// (shared state via Arc pattern).
#[macro_export]
macro_rules! project_repository_tests {
    ($factory:expr) => {
        mod project_repository_contract_tests {
            use super::*;
            use freelas::core::entity::{CustomerId, FreelaId};
            use freelas::core::repository::ProjectRepository;
            use rust_decimal::Decimal;
            use std::collections::HashSet;

            // ==================================================================
            // Customers
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_find_customer() {
                let repo = $factory;

                let created = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();
                assert_eq!(created.name, "ACME");
                assert_eq!(created.owner_id, ALICE);

                let found = repo.find_customer(created.id).await.unwrap();
                assert_eq!(found, Some(created));
            }

            #[tokio::test]
            async fn test_find_missing_customer() {
                let repo = $factory;

                let found = repo.find_customer(CustomerId::new(999)).await.unwrap();
                assert!(found.is_none(), "Unknown key should return None");
            }

            #[tokio::test]
            async fn test_list_customers_by_owner() {
                let repo = $factory;
                repo.insert_customer(new_customer(ALICE, "A1")).await.unwrap();
                repo.insert_customer(new_customer(BOB, "B1")).await.unwrap();
                repo.insert_customer(new_customer(ALICE, "A2")).await.unwrap();

                let mine = repo.list_customers(ALICE).await.unwrap();
                assert_eq!(mine.len(), 2);
                assert!(mine.iter().all(|c| c.owner_id == ALICE));
            }

            #[tokio::test]
            async fn test_update_customer() {
                let repo = $factory;
                let mut customer = repo.insert_customer(new_customer(ALICE, "Old")).await.unwrap();

                customer.name = "New".to_string();
                repo.update_customer(&customer).await.unwrap();

                let found = repo.find_customer(customer.id).await.unwrap().unwrap();
                assert_eq!(found.name, "New");
            }

            #[tokio::test]
            async fn test_update_missing_customer() {
                let repo = $factory;
                let mut customer = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();
                repo.delete_customer(customer.id).await.unwrap();

                customer.name = "Ghost".to_string();
                assert!(repo.update_customer(&customer).await.is_err());
            }

            // ==================================================================
            // Projects
            // ==================================================================

            #[tokio::test]
            async fn test_insert_freela_with_installments() {
                let repo = $factory;
                let customer = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();
                let months = [date(2024, 1, 5), date(2024, 2, 5), date(2024, 3, 5)];

                let created = repo
                    .insert_freela(new_freela(ALICE, customer.id, "Site", &months))
                    .await
                    .unwrap();

                assert_eq!(created.installments.len(), 3);
                assert!(created.installments.iter().all(|i| i.freela_id == created.id));
                let keys: HashSet<_> = created.installments.iter().map(|i| i.id).collect();
                assert_eq!(keys.len(), 3, "Installment keys should be distinct");
                assert_eq!(created.scheduled_total(), Decimal::from(300));

                let found = repo.find_freela(created.id).await.unwrap().unwrap();
                assert_eq!(found, created);
                let found_months: Vec<_> = found.installments.iter().map(|i| i.month).collect();
                assert_eq!(found_months, months);
            }

            #[tokio::test]
            async fn test_insert_freela_for_missing_customer() {
                let repo = $factory;
                let result = repo
                    .insert_freela(new_freela(ALICE, CustomerId::new(42), "Site", &[date(2024, 1, 1)]))
                    .await;

                assert!(result.is_err());
                assert!(repo.list_freelas(ALICE).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_freelas_by_owner() {
                let repo = $factory;
                let mine = repo.insert_customer(new_customer(ALICE, "A")).await.unwrap();
                let theirs = repo.insert_customer(new_customer(BOB, "B")).await.unwrap();
                let months = [date(2024, 1, 1)];

                repo.insert_freela(new_freela(ALICE, mine.id, "One", &months)).await.unwrap();
                repo.insert_freela(new_freela(BOB, theirs.id, "Two", &months)).await.unwrap();
                repo.insert_freela(new_freela(ALICE, mine.id, "Three", &months)).await.unwrap();

                let listed = repo.list_freelas(ALICE).await.unwrap();
                assert_eq!(listed.len(), 2);
                assert!(listed.iter().all(|f| f.owner_id == ALICE));
                assert!(listed.iter().all(|f| f.installments.len() == 1));

                assert!(repo.list_freelas(freelas::core::entity::UserId::new(3)).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_update_freela_keeps_installments() {
                let repo = $factory;
                let customer = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();
                let mut freela = repo
                    .insert_freela(new_freela(ALICE, customer.id, "Site", &[date(2024, 1, 1), date(2024, 2, 1)]))
                    .await
                    .unwrap();
                let before = freela.installments.clone();

                freela.name = "Shop".to_string();
                freela.price = Decimal::from(999);
                freela.payment_installment_count = 5;
                freela.installments.clear();
                repo.update_freela(&freela).await.unwrap();

                let found = repo.find_freela(freela.id).await.unwrap().unwrap();
                assert_eq!(found.name, "Shop");
                assert_eq!(found.price, Decimal::from(999));
                assert_eq!(found.payment_installment_count, 5);
                assert_eq!(found.installments, before);
            }

            #[tokio::test]
            async fn test_update_missing_freela() {
                let repo = $factory;
                let customer = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();
                let mut freela = repo
                    .insert_freela(new_freela(ALICE, customer.id, "Site", &[date(2024, 1, 1)]))
                    .await
                    .unwrap();
                repo.delete_freela(freela.id).await.unwrap();

                freela.id = FreelaId::new(freela.id.as_u64() + 100);
                assert!(repo.update_freela(&freela).await.is_err());
            }

            #[tokio::test]
            async fn test_delete_freela() {
                let repo = $factory;
                let customer = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();
                let keep = repo
                    .insert_freela(new_freela(ALICE, customer.id, "Keep", &[date(2024, 1, 1)]))
                    .await
                    .unwrap();
                let gone = repo
                    .insert_freela(new_freela(ALICE, customer.id, "Gone", &[date(2024, 1, 1)]))
                    .await
                    .unwrap();

                repo.delete_freela(gone.id).await.unwrap();

                assert!(repo.find_freela(gone.id).await.unwrap().is_none());
                assert_eq!(repo.find_freela(keep.id).await.unwrap(), Some(keep));
                assert!(repo.find_customer(customer.id).await.unwrap().is_some());
            }

            #[tokio::test]
            async fn test_delete_customer_cascades() {
                let repo = $factory;
                let doomed = repo.insert_customer(new_customer(ALICE, "Doomed")).await.unwrap();
                let other = repo.insert_customer(new_customer(ALICE, "Other")).await.unwrap();
                let months = [date(2024, 1, 1), date(2024, 2, 1)];

                let lost = repo.insert_freela(new_freela(ALICE, doomed.id, "Lost", &months)).await.unwrap();
                let kept = repo.insert_freela(new_freela(ALICE, other.id, "Kept", &months)).await.unwrap();

                repo.delete_customer(doomed.id).await.unwrap();

                assert!(repo.find_customer(doomed.id).await.unwrap().is_none());
                assert!(repo.find_freela(lost.id).await.unwrap().is_none());
                assert_eq!(repo.list_freelas(ALICE).await.unwrap(), vec![kept]);
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let repo = $factory;
                let customer = repo.insert_customer(new_customer(ALICE, "ACME")).await.unwrap();

                let handles: Vec<_> = (0..10)
                    .map(|i| {
                        let repo = repo.clone();
                        let customer_id = customer.id;
                        tokio::spawn(async move {
                            repo.insert_freela(new_freela(
                                ALICE,
                                customer_id,
                                &format!("Project {}", i),
                                &[date(2024, 1, 1), date(2024, 2, 1)],
                            ))
                            .await
                            .unwrap()
                        })
                    })
                    .collect();

                let mut keys = HashSet::new();
                for handle in handles {
                    let freela = handle.await.unwrap();
                    assert!(keys.insert(freela.id), "Keys should never be reused");
                }

                let listed = repo.list_freelas(ALICE).await.unwrap();
                assert_eq!(listed.len(), 10);
                assert!(listed.iter().all(|f| f.installments.len() == 2));
            }
        }
    };
}
