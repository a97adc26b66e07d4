use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raychess::{Board, Coord, PieceKind, Square};

fn board_from_rows(rows: [&str; 8]) -> Board {
    // Uppercase is White. Letters follow the usual `pnbrqk` convention, not the dump keys
    let mut b = Board::empty();
    for (x, row) in rows.iter().enumerate() {
        for (y, ch) in row.chars().enumerate() {
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => continue,
            };
            let piece = if ch.is_ascii_uppercase() {
                kind.white()
            } else {
                kind.black()
            };
            b.put(Coord::from_parts(x, y), Square::Piece(piece));
        }
    }
    b
}

fn boards() -> Vec<(&'static str, Board)> {
    vec![
        ("initial", Board::initial()),
        (
            "queens",
            board_from_rows([
                "q......Q", "........", "..q..Q..", "........", "........", "..Q..q..",
                "........", "Q......q",
            ]),
        ),
        (
            "crowded",
            board_from_rows([
                "rp.n.bPR", "np..p.PN", "bp.Q..PB", "qp.k.rPQ", "kp..b.PK", "bpN...PB",
                "np...pPN", "rp.q..PR",
            ]),
        ),
        ("empty", Board::empty()),
    ]
}

fn bench_valid_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_moves");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for coord in Coord::iter() {
                    black_box(board.valid_moves_from(coord).len());
                }
            })
        });
    }
}

fn bench_is_move_allowed(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_move_allowed");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for src in Coord::iter().filter(|&c| board.get(c).is_occupied()) {
                    black_box(board.is_move_allowed(src, Coord::from_parts(3, 4)));
                }
            })
        });
    }
}

fn bench_initial(c: &mut Criterion) {
    c.bench_function("initial", |b| b.iter(|| black_box(Board::initial())));
}

fn bench_format(c: &mut Criterion) {
    let board = Board::initial();
    c.bench_function("to_string", |b| b.iter(|| black_box(board.to_string())));
}

criterion_group!(
    chess,
    bench_valid_moves,
    bench_is_move_allowed,
    bench_initial,
    bench_format,
);

criterion_main!(chess);
