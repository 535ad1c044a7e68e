//! Benchmarks for the per-keystroke form work: eligibility checks and the
//! table formatters.

use contatos_mcp_server::domain::{normalize_phone, to_human_date, to_human_phone};
use contatos_mcp_server::form::{is_commit_eligible, ContactDraft, FormMode};
use contatos_mcp_server::models::{Contact, ContactRow};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn valid_draft() -> ContactDraft {
    ContactDraft {
        nome: "Ana".to_string(),
        telefone: "11 98765 4321".to_string(),
        email: "ana@x.com".to_string(),
        ativo: true,
        data_nascimento: "2000-01-05".to_string(),
    }
}

fn bench_commit_eligibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_commit_eligible");

    let valid = valid_draft();
    let bad_email = ContactDraft {
        email: "not-an-email".to_string(),
        ..valid_draft()
    };
    let empty = ContactDraft::new();

    for (name, draft) in [("valid", &valid), ("bad_email", &bad_email), ("empty", &empty)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), draft, |b, draft| {
            b.iter(|| is_commit_eligible(black_box(draft), FormMode::New));
        });
    }

    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    c.bench_function("normalize_phone", |b| {
        b.iter(|| normalize_phone(black_box("11 98765 4321")))
    });

    c.bench_function("to_human_phone", |b| {
        b.iter(|| to_human_phone(black_box("11987654321")))
    });

    c.bench_function("to_human_date", |b| {
        b.iter(|| to_human_date(black_box("2000-01-05")))
    });
}

fn bench_table_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact_rows");

    for size in [10usize, 100, 1000] {
        let contacts: Vec<Contact> = (0..size)
            .map(|i| {
                Contact::new(
                    format!("Contato {}", i),
                    "1187654321",
                    format!("contato{}@x.com", i),
                    i % 2 == 0,
                    "1999-10-20",
                )
                .with_id(i as i64)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| contacts.iter().map(ContactRow::from).collect::<Vec<_>>());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_commit_eligibility, bench_formatters, bench_table_rows);
criterion_main!(benches);
