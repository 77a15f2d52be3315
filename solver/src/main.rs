use tracing_subscriber::EnvFilter;

use trisolitaire::{Board, ExhaustiveSearchEngine, MoveCatalog, Outcome, SearchEngine, SearchLimits};

fn main() -> Result<(), trisolitaire::BoardError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // the 15-hole game, apex empty
    let mut board = Board::create(5)?;
    print!("{}", board.numbered());
    board.remove_start(1)?;
    print!("\n{}\n", board);

    let start = board.clone();
    let catalog = MoveCatalog::for_board(&board);
    match SearchEngine::new(&catalog).solve(&mut board) {
        Outcome::Solved(solution) => {
            println!("Found a solution in {} moves:", solution.len());
            print!("{}", solution);
            print!("\n{}", board);
        }
        Outcome::Unsolvable => println!("No solution"),
        Outcome::BudgetExhausted => println!("Gave up"),
    }

    let solutions = ExhaustiveSearchEngine::new(&catalog)
        .with_limits(SearchLimits::default().with_parallel(true))
        .solve(&start, 100);
    println!("\nCollected {} solutions after visiting {} positions", solutions.count(), solutions.nodes());
    if let Some(shortest) = solutions.shortest() {
        println!("Shortest takes {} moves", shortest.len());
    }

    Ok(())
}
