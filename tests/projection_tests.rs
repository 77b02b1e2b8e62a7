//! End-to-end projection behavior through the public engine API
//!
//! The ledger and plan records are in-memory fakes, wired into
//! `ProjectionService` the same way `Storage` is in the binary.

use std::collections::HashMap;

use approx::assert_relative_eq;
use chrono::NaiveDate;

use horizon::models::{
    Account, AccountId, AccountType, AdjustmentMode, Behavior, BehaviorConfiguration,
    CategoryAdjustment, CategoryId, FinancialGoal, InvestmentPolicy, Money, Scenario, ScenarioId,
    Transaction, TransactionKind,
};
use horizon::projection::{BaselineCalculator, GoalStatus, LedgerReader, PlanReader};
use horizon::services::ProjectionService;
use horizon::{HorizonError, HorizonResult};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 10, 18)
}

/// One month of 1,000 salary and 600 rent, with every balance reported as zero
struct Ledger {
    account: Account,
    transactions: Vec<Transaction>,
    salary: CategoryId,
    rent: CategoryId,
}

impl Ledger {
    fn new() -> Self {
        let account = Account::new("Checking", AccountType::Checking);
        let salary = CategoryId::new();
        let rent = CategoryId::new();

        let entry = |day: u32, cents: i64, kind: TransactionKind, category: CategoryId| {
            let mut txn = Transaction::new(account.id, date(2026, 9, day), Money::from_cents(cents), kind);
            txn.category_id = Some(category);
            txn
        };
        let income = entry(1, 100_000, TransactionKind::Income, salary);
        let expense = entry(3, 60_000, TransactionKind::Expense, rent);

        Self {
            account,
            transactions: vec![income, expense],
            salary,
            rent,
        }
    }
}

impl LedgerReader for Ledger {
    fn list_transactions(&self, start: NaiveDate, end: NaiveDate) -> HorizonResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect())
    }

    fn list_accounts(&self) -> HorizonResult<Vec<Account>> {
        Ok(vec![self.account.clone()])
    }

    fn balance_as_of(&self, _account_id: AccountId, _date: NaiveDate) -> HorizonResult<Money> {
        Ok(Money::from_cents(0))
    }
}

#[derive(Default)]
struct Plans {
    scenarios: HashMap<ScenarioId, Scenario>,
    configurations: Vec<BehaviorConfiguration>,
    goals: Vec<FinancialGoal>,
}

impl Plans {
    fn add_scenario(&mut self, name: &str) -> ScenarioId {
        let scenario = Scenario::new(name, 1, today());
        let id = scenario.id;
        self.scenarios.insert(id, scenario);
        id
    }

    fn configure(&mut self, scenario_id: ScenarioId, behavior: Behavior) {
        self.configurations
            .push(BehaviorConfiguration::new(scenario_id, behavior, None));
    }
}

impl PlanReader for Plans {
    fn get_scenario(&self, id: ScenarioId) -> HorizonResult<Scenario> {
        self.scenarios
            .get(&id)
            .cloned()
            .ok_or_else(|| HorizonError::scenario_not_found(id.to_string()))
    }

    fn list_configurations(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<BehaviorConfiguration>> {
        Ok(self
            .configurations
            .iter()
            .filter(|c| c.scenario_id == scenario_id)
            .cloned()
            .collect())
    }

    fn list_goals(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<FinancialGoal>> {
        Ok(self
            .goals
            .iter()
            .filter(|g| g.scenario_id == scenario_id)
            .cloned()
            .collect())
    }
}

fn service<'a>(ledger: &'a Ledger, plans: &'a Plans) -> ProjectionService<'a> {
    ProjectionService::with_sources(ledger, plans, BaselineCalculator::default(), today())
}

#[test]
fn baseline_averages_active_months() {
    let ledger = Ledger::new();
    let plans = Plans::default();

    let baseline = service(&ledger, &plans).calculate_baseline().unwrap();
    assert_eq!(baseline.months_observed, 1);
    assert_relative_eq!(baseline.total_income(), 1_000.0);
    assert_relative_eq!(baseline.total_expense(), 600.0);
    assert_relative_eq!(baseline.savings_rate, 0.4);
    assert_eq!(baseline.net_worth, 0.0);
}

#[test]
fn unchanged_behavior_accumulates_savings() {
    let ledger = Ledger::new();
    let mut plans = Plans::default();
    let id = plans.add_scenario("Steady");

    let result = service(&ledger, &plans).calculate_projection(id).unwrap();
    assert_eq!(result.projections.len(), 12);
    for pair in result.projections.windows(2) {
        assert!(pair[0].month < pair[1].month);
    }

    let last = result.projections.last().unwrap();
    assert_relative_eq!(last.net_worth, 4_800.0);
    assert!(result.projections.iter().all(|p| p.investment_yield == 0.0));
    assert_relative_eq!(result.summary.accumulated_savings, 4_800.0);
}

#[test]
fn investment_yield_compounds_on_prior_net_worth() {
    let ledger = Ledger::new();
    let mut plans = Plans::default();
    let id = plans.add_scenario("Invest");
    plans.configure(
        id,
        Behavior::Investment(InvestmentPolicy {
            allocation: 0.2,
            monthly_return_rate: 0.01,
        }),
    );

    let result = service(&ledger, &plans).calculate_projection(id).unwrap();
    let first = &result.projections[0];
    assert_relative_eq!(first.savings, 400.0);
    assert_relative_eq!(first.investment_yield, 0.0);
    assert_relative_eq!(first.investment_contribution, 80.0);
    assert_relative_eq!(first.net_worth, 400.0);

    let second = &result.projections[1];
    assert_relative_eq!(second.investment_yield, 4.0);
    assert_relative_eq!(second.net_worth, 804.0);

    let mut previous = 0.0;
    for p in &result.projections {
        assert_relative_eq!(p.net_worth, previous + p.savings + p.investment_yield, epsilon = 1e-9);
        previous = p.net_worth;
    }
}

#[test]
fn percentage_adjustment_scales_category() {
    let ledger = Ledger::new();
    let mut plans = Plans::default();
    let id = plans.add_scenario("Cheaper rent");
    plans.configure(
        id,
        Behavior::Expense(CategoryAdjustment {
            category_id: Some(ledger.rent),
            mode: AdjustmentMode::Percentage { change_percent: -20.0 },
        }),
    );
    plans.configure(
        id,
        Behavior::Income(CategoryAdjustment {
            category_id: Some(ledger.salary),
            mode: AdjustmentMode::Zero,
        }),
    );

    let result = service(&ledger, &plans).calculate_projection(id).unwrap();
    let first = &result.projections[0];
    assert_relative_eq!(first.expense.total, 480.0);
    assert_eq!(first.income.total, 0.0);
    assert_relative_eq!(first.savings, -480.0);
}

#[test]
fn distant_goal_is_infeasible_with_suggestions() {
    let ledger = Ledger::new();
    let mut plans = Plans::default();
    let id = plans.add_scenario("Stretch");
    plans
        .goals
        .push(FinancialGoal::new(id, "House", 10_000.0, date(2027, 9, 30)));

    let result = service(&ledger, &plans).calculate_projection(id).unwrap();
    let analysis = &result.goal_analyses[0];
    assert_eq!(analysis.status, GoalStatus::Infeasible);
    assert!(!analysis.suggestions.is_empty());
    assert!(analysis.difference > 0.0);
}

#[test]
fn comparison_needs_two_or_three_scenarios() {
    let ledger = Ledger::new();
    let mut plans = Plans::default();
    let steady = plans.add_scenario("Steady");
    let frugal = plans.add_scenario("Frugal");
    plans.configure(
        frugal,
        Behavior::Expense(CategoryAdjustment {
            category_id: Some(ledger.rent),
            mode: AdjustmentMode::FixedValue { amount: 300.0 },
        }),
    );

    let svc = service(&ledger, &plans);
    assert!(svc.compare_scenarios(&[steady]).unwrap_err().is_validation());

    let result = svc.compare_scenarios(&[steady, frugal]).unwrap();
    assert_eq!(result.net_worth_gap.highest, frugal);
    assert_eq!(result.net_worth_gap.lowest, steady);
    assert_relative_eq!(result.net_worth_gap.absolute, 3_600.0);
    assert_relative_eq!(result.net_worth_gap.percent.unwrap(), 75.0);
}

#[test]
fn unknown_scenario_is_not_found() {
    let ledger = Ledger::new();
    let plans = Plans::default();
    let err = service(&ledger, &plans)
        .calculate_projection(ScenarioId::new())
        .unwrap_err();
    assert!(err.is_not_found());
}
