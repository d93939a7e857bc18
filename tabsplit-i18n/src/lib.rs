#[cfg(all(feature = "es", feature = "en"))]
compile_error!("Cannot enable both 'es' and 'en' features at the same time");

#[cfg(feature = "es")]
pub mod strings {
    pub const PERSON: &str = "Persona";
    pub const NET: &str = "Balance";
    pub const OWES: &str = "Debe";
    pub const OWED_BY: &str = "Le deben";
    pub const FROM: &str = "Paga";
    pub const TO: &str = "Recibe";
    pub const AMOUNT: &str = "Monto";
    pub const PAID: &str = "Pagado";
    pub const STATISTIC: &str = "Estadística";
    pub const VALUE: &str = "Valor";
    pub const TOTAL_SPENT: &str = "Total gastado";
    pub const EXPENSE_COUNT: &str = "Cantidad de gastos";
    pub const AVERAGE_EXPENSE: &str = "Promedio por gasto";
    pub const LARGEST_EXPENSE: &str = "Gasto mayor";
    pub const SMALLEST_EXPENSE: &str = "Gasto menor";
    pub const PERSON_COUNT: &str = "Personas";
    pub const ID: &str = "Id";
    pub const DATE: &str = "Fecha";
    pub const DESCRIPTION: &str = "Descripción";
    pub const PAYER: &str = "Pagado por";
    pub const PARTICIPANTS: &str = "Participantes";
    pub const ALL_SETTLED: &str = "¡Todas las cuentas están saldadas!";
    pub const NO_EXPENSES: &str = "No hay gastos registrados";
    pub const LEDGER_CALCULATION_FAILED: &str = "No se pudo calcular el balance";
    pub const STORE_UNAVAILABLE: &str = "No se pudieron leer los gastos";
    pub const EXPENSES_CLEARED: &str = "Se eliminaron todos los gastos";
    pub const TOTAL_SPENT_OVERFLOW: &str = "El total gastado excede el rango representable";
}

#[cfg(not(feature = "es"))]
pub mod strings {
    pub const PERSON: &str = "Person";
    pub const NET: &str = "Balance";
    pub const OWES: &str = "Owes";
    pub const OWED_BY: &str = "Is owed";
    pub const FROM: &str = "Pays";
    pub const TO: &str = "Receives";
    pub const AMOUNT: &str = "Amount";
    pub const PAID: &str = "Paid";
    pub const STATISTIC: &str = "Statistic";
    pub const VALUE: &str = "Value";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const EXPENSE_COUNT: &str = "Expenses";
    pub const AVERAGE_EXPENSE: &str = "Average expense";
    pub const LARGEST_EXPENSE: &str = "Largest expense";
    pub const SMALLEST_EXPENSE: &str = "Smallest expense";
    pub const PERSON_COUNT: &str = "People";
    pub const ID: &str = "Id";
    pub const DATE: &str = "Date";
    pub const DESCRIPTION: &str = "Description";
    pub const PAYER: &str = "Paid by";
    pub const PARTICIPANTS: &str = "Participants";
    pub const ALL_SETTLED: &str = "All balances are settled!";
    pub const NO_EXPENSES: &str = "No expenses recorded";
    pub const LEDGER_CALCULATION_FAILED: &str = "Balance calculation failed";
    pub const STORE_UNAVAILABLE: &str = "Could not read expenses";
    pub const EXPENSES_CLEARED: &str = "All expenses cleared";
    pub const TOTAL_SPENT_OVERFLOW: &str = "Total spent exceeds the representable range";
}

pub use strings::*;

#[cfg(feature = "es")]
pub fn expense_rejected(expense_id: impl std::fmt::Display) -> String {
    format!("El gasto '{expense_id}' no es válido")
}

#[cfg(feature = "es")]
pub fn balance_overflow(person: impl std::fmt::Display) -> String {
    format!("El balance de '{person}' excede el rango representable")
}

#[cfg(feature = "es")]
pub fn paid_total_overflow(payer: impl std::fmt::Display) -> String {
    format!("El total pagado por '{payer}' excede el rango representable")
}

#[cfg(feature = "es")]
pub fn expense_added(expense_id: impl std::fmt::Display) -> String {
    format!("Gasto '{expense_id}' guardado")
}

#[cfg(feature = "es")]
pub fn expense_removed(expense_id: impl std::fmt::Display) -> String {
    format!("Gasto '{expense_id}' eliminado")
}

#[cfg(feature = "es")]
pub fn expense_not_found(expense_id: impl std::fmt::Display) -> String {
    format!("No existe el gasto '{expense_id}'")
}

#[cfg(not(feature = "es"))]
pub fn expense_rejected(expense_id: impl std::fmt::Display) -> String {
    format!("Expense '{expense_id}' is invalid")
}

#[cfg(not(feature = "es"))]
pub fn balance_overflow(person: impl std::fmt::Display) -> String {
    format!("Balance of '{person}' exceeds the representable range")
}

#[cfg(not(feature = "es"))]
pub fn paid_total_overflow(payer: impl std::fmt::Display) -> String {
    format!("Total paid by '{payer}' exceeds the representable range")
}

#[cfg(not(feature = "es"))]
pub fn expense_added(expense_id: impl std::fmt::Display) -> String {
    format!("Saved expense '{expense_id}'")
}

#[cfg(not(feature = "es"))]
pub fn expense_removed(expense_id: impl std::fmt::Display) -> String {
    format!("Removed expense '{expense_id}'")
}

#[cfg(not(feature = "es"))]
pub fn expense_not_found(expense_id: impl std::fmt::Display) -> String {
    format!("No expense with id '{expense_id}'")
}
