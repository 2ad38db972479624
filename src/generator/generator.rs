use crate::models::{CreativeIdea, IdeaSeeds};
use super::formatting;
use rand::Rng;

const TOOL_DRAWS: usize = 3;

pub struct IdeaGenerator {
    seeds: IdeaSeeds,
}

impl IdeaGenerator {
    /// `seeds` must already be validated, every pool non-empty.
    pub fn new(seeds: IdeaSeeds) -> Self {
        Self { seeds }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> CreativeIdea {
        let seeds = &self.seeds;

        let title = formatting::compose_title(
            pick(&seeds.verbs, rng).as_str(),
            pick(&seeds.subjects, rng).as_str(),
        );

        // the prose gets its own focus/mood draws, separate from the fields below
        let description =
            formatting::compose_description(
                pick(&seeds.focuses, rng).as_str(),
                pick(&seeds.moods, rng).as_str(),
            );

        let mood = pick(&seeds.moods, rng).clone();
        let focus = pick(&seeds.focuses, rng).clone();
        let palette = pick(&seeds.palettes, rng).clone();

        let mut tools: Vec<String> = Vec::with_capacity(TOOL_DRAWS);
        for _ in 0..TOOL_DRAWS {
            let tool = pick(&seeds.tools, rng);
            if !tools.contains(tool) {
                tools.push(tool.clone());
            }
        }

        CreativeIdea {
            title,
            description,
            mood,
            focus,
            palette,
            tools,
        }
    }
}

fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
