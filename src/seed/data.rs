use crate::error::ApiError;
use crate::model::{NewBranch, NewEmployee};
use crate::store::traits::Store;

fn seed_branches() -> Vec<NewBranch> {
    vec![
        NewBranch {
            name: "Vancouver Branch".to_string(),
            address: "1300 Burrard St, Vancouver, BC, V6Z 2C7".to_string(),
            phone: "604-456-0022".to_string(),
        },
        NewBranch {
            name: "Edmonton Branch".to_string(),
            address: "7250 82 Ave NW, Edmonton, AB, T6B 0G4".to_string(),
            phone: "780-468-6800".to_string(),
        },
        NewBranch {
            name: "Toronto Branch".to_string(),
            address: "440 Queen St W, Toronto, ON, M5V 2A8".to_string(),
            phone: "416-980-2500".to_string(),
        },
    ]
}

fn seed_employees() -> Vec<NewEmployee> {
    vec![
        NewEmployee {
            name: "Alice Johnson".to_string(),
            position: "Branch Manager".to_string(),
            department: "Management".to_string(),
            email: "alice.johnson@pixell-river.com".to_string(),
            phone: "604-555-0148".to_string(),
            branch_id: 1,
        },
        NewEmployee {
            name: "Raj Patel".to_string(),
            position: "Systems Administrator".to_string(),
            department: "IT".to_string(),
            email: "raj.patel@pixell-river.com".to_string(),
            phone: "604-555-0172".to_string(),
            branch_id: 1,
        },
        NewEmployee {
            name: "Maria Garcia".to_string(),
            position: "Loan Officer".to_string(),
            department: "Loans".to_string(),
            email: "maria.garcia@pixell-river.com".to_string(),
            phone: "780-555-0193".to_string(),
            branch_id: 2,
        },
        NewEmployee {
            name: "Chen Wei".to_string(),
            position: "Teller".to_string(),
            department: "Operations".to_string(),
            email: "chen.wei@pixell-river.com".to_string(),
            phone: "780-555-0144".to_string(),
            branch_id: 2,
        },
        NewEmployee {
            name: "Priya Sharma".to_string(),
            position: "Financial Advisor".to_string(),
            department: "Advisory".to_string(),
            email: "priya.sharma@pixell-river.com".to_string(),
            phone: "416-555-0140".to_string(),
            branch_id: 3,
        },
    ]
}

/// Loads a small demo data set into an empty store: three branches and five
/// employees spread across them.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<(), ApiError> {
    for branch in seed_branches() {
        store.create_branch(branch).await?;
    }
    for employee in seed_employees() {
        store.create_employee(employee).await?;
    }
    log::info!("seed data loaded: 3 branches, 5 employees");
    Ok(())
}
