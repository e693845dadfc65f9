//! Validation Pipeline Example
//!
//! Builds a login query from raw form fields. Each field check is a
//! predicate turned into a deferred with `to_deferred`; `lift` assembles
//! the query once every check has passed and `second` sequences the
//! password-confirmation check in front of it.
//!
//! Checks fail fast: when several fields are invalid, the error of the
//! leftmost field is reported.
//!
//! Run with: cargo run --example validation_pipeline

use settle::prelude::*;

#[derive(Debug, PartialEq)]
struct LoginQuery {
    email: String,
    password: String,
}

#[derive(Debug, Default)]
struct Form {
    email: String,
    password: String,
    confirm_password: String,
}

fn not_empty(field: &'static str) -> impl Fn(String) -> FromResult<String, String> {
    to_deferred(
        |value: &String| !value.trim().is_empty(),
        move |_| format!("Field {} cannot be empty", field),
    )
}

fn is_email(value: String) -> FromResult<String, String> {
    to_deferred(
        |value: &String| value.contains('@'),
        |value| format!("'{}' is not an email address", value),
    )(value)
}

fn passwords_match(password: String, confirmation: String) -> BoxedDeferred<String, String> {
    if password == confirmation {
        pure(password).boxed()
    } else {
        reject("Passwords do not match".to_string()).boxed()
    }
}

fn validate(form: Form) -> impl Deferred<Output = LoginQuery, Error = String> {
    let email = not_empty("email")(form.email).and_then(is_email);

    let password = lift2(
        passwords_match,
        not_empty("password")(form.password.clone()),
        not_empty("confirm_password")(form.confirm_password),
    )
    .flatten();

    let query = lift2(
        |email, password| LoginQuery { email, password },
        email,
        not_empty("password")(form.password),
    )
    .ensure(|q| q.password.len() >= 8, "Password must be at least 8 characters");

    second(password, query)
}

#[tokio::main]
async fn main() {
    println!("Validation Pipeline Example");
    println!("===========================\n");

    let forms = vec![
        (
            "valid",
            Form {
                email: "ada@example.com".into(),
                password: "correct horse".into(),
                confirm_password: "correct horse".into(),
            },
        ),
        (
            "mismatched confirmation",
            Form {
                email: "ada@example.com".into(),
                password: "correct horse".into(),
                confirm_password: "battery staple".into(),
            },
        ),
        (
            "several problems",
            Form {
                email: "not-an-email".into(),
                password: "short".into(),
                ..Form::default()
            },
        ),
        (
            "short password",
            Form {
                email: "ada@example.com".into(),
                password: "short".into(),
                confirm_password: "short".into(),
            },
        ),
    ];

    for (label, form) in forms {
        match validate(form).settle().await {
            Ok(query) => println!("{:<24} ok: {:?}", label, query),
            Err(e) => println!("{:<24} rejected: {}", label, e),
        }
    }

    // Collect every valid address from a batch, dropping the invalid ones
    let addresses = vec!["a@x.io", "", "b@y.io", "nope"];
    let valid = filter(addresses, |address: &&str| {
        is_email(address.to_string())
            .map(|_| true)
            .recover(|_| pure::<_, String>(false))
    });
    println!("\nValid addresses: {:?}", valid.settle().await);
}
