use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tessera_governance::{Ballot, GovernanceConfig, GovernanceEngine, ProposalKind};
use tessera_ledger::{Ledger, TokenLedger};
use tessera_types::{Address, Amount};

fn addr(index: u32) -> Address {
    let mut bytes = [0u8; 20];
    bytes[..4].copy_from_slice(&index.to_be_bytes());
    bytes[4] = 1;
    Address::from_bytes(bytes)
}

fn funded_engine(accounts: u32) -> GovernanceEngine<TokenLedger> {
    let mut ledger = TokenLedger::new();
    for i in 0..accounts {
        ledger.mint(&addr(i), Amount::new(1_000)).unwrap();
    }
    GovernanceEngine::new(ledger, GovernanceConfig::default())
}

fn bench_create_proposal(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.bench_function("create_proposal", |b| {
        let mut engine = funded_engine(1);
        let mut now = 0u64;
        b.iter(|| {
            now += 1;
            black_box(
                engine
                    .create_proposal(addr(0), addr(1), Amount::new(1), ProposalKind::Mint, now)
                    .unwrap(),
            )
        });
    });
    group.finish();
}

fn bench_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let voters = 10_000u32;
    group.throughput(Throughput::Elements(voters as u64));
    group.bench_function("vote_10k_voters", |b| {
        b.iter(|| {
            let mut engine = funded_engine(voters);
            let id = engine
                .create_proposal(addr(0), addr(1), Amount::new(1), ProposalKind::Mint, 0)
                .unwrap();
            for i in 0..voters {
                engine.vote(addr(i), id, Ballot::For, 10).unwrap();
            }
            black_box(engine.proposal(id).unwrap().votes_for)
        });
    });
    group.finish();
}

fn bench_guarded_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_guard");

    // All proposal windows lapsed: the open index is drained once, after
    // which each transfer pays only the empty-set check, regardless of
    // how many proposals the store holds.
    for backlog in [0u64, 1_000, 100_000] {
        group.bench_function(format!("lapsed_backlog_{}", backlog), |b| {
            let mut ledger = TokenLedger::new();
            // Deep pocket so the repeated one-token transfers never drain it
            ledger.mint(&addr(0), Amount::new(u64::MAX as u128)).unwrap();
            let mut engine = GovernanceEngine::new(ledger, GovernanceConfig::default());
            for i in 0..backlog {
                engine
                    .create_proposal(addr(0), addr(1), Amount::new(1), ProposalKind::Mint, i)
                    .unwrap();
            }
            let thawed_at = backlog + 45_000;
            b.iter(|| engine.transfer(addr(0), addr(1), Amount::new(1), thawed_at).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_create_proposal,
    bench_vote,
    bench_guarded_transfer
);
criterion_main!(benches);
