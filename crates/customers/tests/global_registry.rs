//! The process-wide registry behind `Customer::new`.
//!
//! Every check lives in one test: the counter is shared by the whole test
//! binary, so parallel tests would race on it.

use hotel_core::{Code, DomainError};
use hotel_customers::{Customer, CustomerRegistry};

#[test]
fn global_counter_numbers_customers_from_process_start() {
    hotel_observability::init();

    assert_eq!(Customer::count(), 0);

    let ana = Customer::new("Ana", "12345678Z", "555-1234").unwrap();
    assert_eq!(ana.code(), Code::new(1));

    let luis = Customer::new("Luis", "00000000T", "555-0000").unwrap();
    assert_eq!(luis.code(), Code::new(2));
    assert_eq!(Customer::count(), 2);

    // Rejected DNI: no customer, counter unchanged.
    let err = Customer::new("Bad", "12345678A", "555-9999").unwrap_err();
    assert!(matches!(err, DomainError::InvalidFormat(_)));
    assert_eq!(Customer::count(), 2);

    Customer::reset_count(6);
    assert_eq!(Customer::count(), 6);
    assert_eq!(CustomerRegistry::global().count(), 6);

    let mut seventh = Customer::new("Ana", "12345678Z", "555-1234").unwrap();
    assert_eq!(seventh.code(), Code::new(7));
    assert_eq!(
        seventh.describe(),
        "Código: 7, Nombre: Ana, DNI: 12345678Z, Teléfono: 555-1234"
    );

    seventh.set_national_id("garbage");
    assert_eq!(
        seventh.to_string(),
        "Código: 7, Nombre: Ana, DNI: garbage, Teléfono: 555-1234"
    );
    assert_eq!(Customer::count(), 7);
}
