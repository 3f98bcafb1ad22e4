use eel_option::{Optional, OptionalError};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    email: Option<String>,
}

fn users() -> HashMap<u32, User> {
    let mut users = HashMap::new();
    users.insert(
        1,
        User {
            name: "ada".to_string(),
            email: Some("ada@example.com".to_string()),
        },
    );
    users.insert(
        2,
        User {
            name: "bob".to_string(),
            email: None,
        },
    );
    users
}

fn find_user(users: &HashMap<u32, User>, id: u32) -> Optional<&User> {
    Optional::from_nullable(users.get(&id))
}

#[test]
fn test_doubling_example() {
    assert_eq!(Optional::from_nullable(Some(5)).map(|x| x * 2).get_or_else_value(0), 10);
    assert_eq!(Optional::<i32>::from_nullable(None).map(|x| x * 2).get_or_else_value(0), 0);
}

#[test]
fn test_chained_lookup() {
    let users = users();
    let email_of = |id| {
        find_user(&users, id)
            .flat_map(|u| Optional::from_nullable(u.email.as_deref()))
            .map(str::to_uppercase)
    };

    assert_eq!(email_of(1), Optional::Some("ADA@EXAMPLE.COM".to_string()));
    assert_eq!(email_of(2), Optional::None);
    assert_eq!(email_of(3), Optional::None);
}

#[test]
fn test_fold_renders_both_variants() {
    let users = users();
    let greeting = |id| find_user(&users, id).fold("Hello, stranger".to_string(), |u| format!("Hello, {}", u.name));

    assert_eq!(greeting(1), "Hello, ada");
    assert_eq!(greeting(9), "Hello, stranger");
}

#[test]
fn test_for_each_side_effects() {
    let users = users();
    let log = RefCell::new(Vec::new());

    for id in [1, 2, 3] {
        find_user(&users, id).for_each(|u| log.borrow_mut().push(u.name.clone()));
    }

    assert_eq!(*log.borrow(), vec!["ada".to_string(), "bob".to_string()]);
}

#[test]
fn test_exists_on_borrowed_payload() {
    let users = users();
    assert!(find_user(&users, 1).exists(|u| u.email.is_some()));
    assert!(!find_user(&users, 2).exists(|u| u.email.is_some()));
    assert!(!find_user(&users, 3).exists(|_| true));
}

#[test]
fn test_or_else_fallback_chain() {
    let primary: Optional<&str> = Optional::none();
    let secondary = Optional::Some("secondary");
    let tertiary = Optional::Some("tertiary");

    assert_eq!(primary.or_else(secondary).or_else(tertiary), Optional::Some("secondary"));
    assert_eq!(secondary.or_else(primary), Optional::Some("secondary"));
}

#[test]
fn test_lazy_default_is_not_built_for_some() {
    let built = RefCell::new(0);
    let expensive = || {
        *built.borrow_mut() += 1;
        vec![0u8; 1024]
    };

    let present = Optional::Some(vec![1u8]).get_or_else_compute(expensive);
    assert_eq!(present, vec![1u8]);
    assert_eq!(*built.borrow(), 0);

    let absent = Optional::None.get_or_else_compute(expensive);
    assert_eq!(absent.len(), 1024);
    assert_eq!(*built.borrow(), 1);
}

#[test]
fn test_or_null_interop() {
    let users = users();
    let name: Option<&str> = find_user(&users, 2).map(|u| u.name.as_str()).or_null();
    assert_eq!(name, Some("bob"));

    let missing: Option<&User> = find_user(&users, 42).or_null();
    assert_eq!(missing, None);
}

#[test]
fn test_require_reports_what_is_missing() {
    let users = users();
    let result = find_user(&users, 7).require("user 7");
    assert_eq!(result, Err(OptionalError::Absent { what: "user 7".to_string() }));
    assert_eq!(result.unwrap_err().to_string(), "Missing value: user 7");

    let found = find_user(&users, 1).require("user 1").map(|u| u.name.clone());
    assert_eq!(found, Ok("ada".to_string()));
}

#[test]
fn test_require_with_question_mark() {
    fn domain(users: &HashMap<u32, User>, id: u32) -> Result<String, OptionalError> {
        let user = find_user(users, id).require("user")?;
        let email = Optional::from_nullable(user.email.as_deref()).require("email")?;
        Ok(email.rsplit('@').next().unwrap_or_default().to_string())
    }

    let users = users();
    assert_eq!(domain(&users, 1), Ok("example.com".to_string()));
    assert_eq!(domain(&users, 2), Err(OptionalError::Absent { what: "email".to_string() }));
    assert_eq!(domain(&users, 3), Err(OptionalError::Absent { what: "user".to_string() }));
}

#[test]
fn test_collect_present_values() {
    let users = users();
    let names: Vec<&str> = [1, 2, 3]
        .into_iter()
        .flat_map(|id| find_user(&users, id))
        .map(|u| u.name.as_str())
        .collect();

    assert_eq!(names, vec!["ada", "bob"]);
}

#[test]
fn test_shared_across_threads() {
    let value = Optional::Some(String::from("shared"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = value.clone();
            std::thread::spawn(move || value.map(|s| s.len()).get_or_else_value(0))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}
