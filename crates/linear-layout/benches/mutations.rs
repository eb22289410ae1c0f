use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use linear_layout::{Axis, ConcreteTreeHost, LinearLayout, MemoryRenderTree, NodeId};
use std::rc::Rc;

const MEMBERS: usize = 256;

fn populated_layout() -> (LinearLayout, Vec<NodeId>) {
    let host = Rc::new(ConcreteTreeHost::new(MemoryRenderTree::new()));
    let container = host.borrow_typed().create_node();
    let members: Vec<NodeId> = (0..MEMBERS)
        .map(|_| host.borrow_typed().create_node())
        .collect();
    let layout = LinearLayout::new(Axis::Vertical, host, container);
    (layout, members)
}

fn insert_at_front(c: &mut Criterion) {
    c.bench_function("insert_at_front_256", |b| {
        b.iter_batched(
            populated_layout,
            |(mut layout, members)| {
                for member in members {
                    layout.insert_member(member, 0).expect("insert");
                }
                layout
            },
            BatchSize::SmallInput,
        );
    });
}

fn remove_from_front(c: &mut Criterion) {
    c.bench_function("remove_from_front_256", |b| {
        b.iter_batched(
            || {
                let (mut layout, members) = populated_layout();
                for member in members {
                    layout.add_member(member).expect("append");
                }
                layout
            },
            |mut layout| {
                while !layout.is_empty() {
                    layout.remove_member_at(0).expect("remove");
                }
                layout
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, insert_at_front, remove_from_front);
criterion_main!(benches);
