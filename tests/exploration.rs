use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_explorer::agent::Snapshot;
use maze_explorer::driver::{Driver, Outcome};
use maze_explorer::map::{load_map, Legend};
use maze_explorer::render::Renderer;
use maze_explorer::{Agent, Env, Movement, Pos, Step};

fn env_from(rows: &[&str], start: (i32, i32), finish: (i32, i32)) -> Env {
    let mut walls = HashSet::new();
    let mut width = 0;
    for (y, row) in rows.iter().enumerate() {
        width = width.max(row.len());
        for (x, c) in row.chars().enumerate() {
            if c == '*' {
                walls.insert(Pos::new(x as i32, y as i32));
            }
        }
    }
    Env::new(width, rows.len(), walls, start.into(), finish.into())
}

struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _view: &Snapshot) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn open_grid_walks_straight_to_the_goal() {
    let env = Env::new(3, 3, HashSet::new(), Pos::new(0, 0), Pos::new(2, 2));
    let mut agent = Agent::new(&env);
    let mut moves = Vec::new();
    while !agent.reached_goal() {
        match agent.step() {
            Step::Advanced(m) => moves.push(m),
            other => panic!("unexpected step {:?}", other),
        }
        assert!(!agent.is_trapped());
        assert!(moves.len() <= 9);
    }
    assert_eq!(
        moves,
        vec![Movement::Right, Movement::Down, Movement::Right, Movement::Down]
    );
    assert_eq!(agent.stack_depth(), 4);
}

#[test]
fn dead_end_corridor_backtracks_one_level_at_a_time() {
    // Finish is in a pocket the corridor cannot reach.
    let env = env_from(&["*****", "*   *", "*****", "*  **"], (1, 1), (1, 3));
    let mut agent = Agent::new(&env);

    assert_eq!(agent.step(), Step::Advanced(Movement::Right));
    assert_eq!(agent.step(), Step::Advanced(Movement::Right));
    assert_eq!(agent.pos, Pos::new(3, 1));
    let depth = agent.stack_depth();
    assert_eq!(depth, 2);

    assert_eq!(agent.step(), Step::Backtracked(Movement::Left));
    assert_eq!(agent.pos, Pos::new(2, 1));
    assert_eq!(agent.stack_depth(), depth - 1);

    assert_eq!(agent.step(), Step::Backtracked(Movement::Left));
    assert_eq!(agent.stack_depth(), 0);

    // Back at the start with nothing left to pop.
    assert_eq!(agent.step(), Step::Trapped);
    assert!(agent.is_trapped());
    assert_eq!(agent.pos, Pos::new(1, 1));
}

#[test]
fn detour_after_greedy_dead_end() {
    let env = env_from(
        &["*******", "*   * *", "* *** *", "*     *", "*******"],
        (1, 1),
        (5, 1),
    );
    let mut agent = Agent::new(&env);
    let mut steps = Vec::new();
    while !agent.reached_goal() && !agent.is_trapped() {
        steps.push(agent.step());
    }
    assert!(agent.reached_goal());
    assert_eq!(&steps[..4], &[
        Step::Advanced(Movement::Right),
        Step::Advanced(Movement::Right),
        Step::Backtracked(Movement::Left),
        Step::Backtracked(Movement::Left),
    ]);
    assert_eq!(steps.len(), 12);
    assert_eq!(agent.stack_depth(), 8);
}

#[test]
fn visited_only_grows_and_walls_are_never_entered() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("maps/map2.txt");
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let env = load_map(&path, &Legend::default(), &mut rng).unwrap();
        let mut agent = Agent::new(&env);
        assert!(agent.visited().contains(&agent.pos));

        let mut before = agent.visited().clone();
        while !agent.reached_goal() && !agent.is_trapped() {
            agent.step();
            assert!(agent.visited().is_superset(&before));
            assert!(agent.visited().contains(&agent.pos));
            assert!(!env.is_wall(agent.pos));
            assert!(agent.pos.in_bounds(env.width(), env.height()));
            before = agent.visited().clone();
        }
        // The sample mazes are fully connected.
        assert!(agent.reached_goal(), "seed {} got trapped", seed);
    }
}

#[test]
fn driver_reports_trap_and_goal() {
    let trapped = env_from(&["*****", "*   *", "*****", "*  **"], (1, 1), (1, 3));
    let mut agent = Agent::new(&trapped);
    let mut driver = Driver::new(NullRenderer, Duration::ZERO);
    assert_eq!(driver.run(&mut agent).unwrap(), Outcome::Trapped { steps: 4 });

    let detour = env_from(
        &["*******", "*   * *", "* *** *", "*     *", "*******"],
        (1, 1),
        (5, 1),
    );
    let mut agent = Agent::new(&detour);
    assert_eq!(driver.run(&mut agent).unwrap(), Outcome::Reached { steps: 12 });
}
