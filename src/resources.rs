//! Interview preparation resources and their browsing state

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCategory {
    pub category: &'static str,
    pub questions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrainTeaser {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Tailor Your Resume",
        content: "Customize your resume for each application. Highlight the skills and experience that match the job description, and open bullet points with action verbs such as Led, Developed, Implemented or Optimized.",
    },
    Tip {
        title: "Use Keywords & ATS Optimization",
        content: "Mirror industry keywords from the posting so applicant tracking systems pick up your resume. Stick to standard headings like Work Experience, Education and Skills, and avoid tables or images.",
    },
    Tip {
        title: "Quantify Achievements",
        content: "Back accomplishments with numbers: traffic grown by 45%, load time cut by 60%, a team of 8 developers managed, 15+ projects delivered on time.",
    },
    Tip {
        title: "Research the Company Thoroughly",
        content: "Learn the company's products, culture, recent news and competitors before the interview, and prepare three to five thoughtful questions for your interviewer.",
    },
    Tip {
        title: "Master the STAR Method",
        content: "Prepare five to seven stories structured as Situation, Task, Action, Result covering leadership, conflict, failure, success and teamwork.",
    },
    Tip {
        title: "Follow-Up Strategy",
        content: "Send a short thank-you email within 24 hours that references specific topics from the conversation and restates your interest in the role.",
    },
];

pub const QUESTION_CATEGORIES: &[QuestionCategory] = &[
    QuestionCategory {
        category: "Technical Skills - Web Development",
        questions: &[
            "Explain the difference between REST and GraphQL APIs. When would you use each?",
            "What is the difference between SQL and NoSQL databases? When would you use each?",
            "Explain CORS and how to handle it in web applications.",
            "What are HTTP status codes? Explain 200, 201, 400, 401, 403, 404, 500.",
        ],
    },
    QuestionCategory {
        category: "System Design & Architecture",
        questions: &[
            "How would you design a URL shortening service?",
            "How would you implement a rate limiter for an API?",
            "Design a caching strategy for a high-traffic e-commerce website.",
        ],
    },
    QuestionCategory {
        category: "Behavioral - Leadership & Teamwork",
        questions: &[
            "Tell me about a time you led a project under a tight deadline.",
            "Describe a disagreement with a teammate and how you resolved it.",
            "Give an example of feedback that changed how you work.",
        ],
    },
];

pub const BRAIN_TEASERS: &[BrainTeaser] = &[
    BrainTeaser {
        question: "You have 9 identical-looking balls, one slightly heavier. With a balance scale, how do you find the heavy ball in two weighings?",
        answer: "Split into three groups of three and weigh two groups. The heavier side, or the unweighed group if they balance, holds the ball. Weigh two balls from that group; the heavier one, or the third if they balance, is the answer.",
    },
    BrainTeaser {
        question: "With a 3-gallon jug and a 5-gallon jug, how do you measure exactly 4 gallons?",
        answer: "Fill the 5, pour into the 3 leaving 2. Empty the 3 and pour the 2 into it. Refill the 5 and top up the 3, which takes 1 gallon and leaves exactly 4 in the 5.",
    },
    BrainTeaser {
        question: "Two ropes each take 60 minutes to burn, unevenly. How do you measure 45 minutes?",
        answer: "Light both ends of the first rope and one end of the second. When the first burns out after 30 minutes, light the other end of the second; it finishes 15 minutes later.",
    },
    BrainTeaser {
        question: "Three switches control three bulbs in another room you may enter once. How do you map them?",
        answer: "Turn on switch 1 for ten minutes, turn it off, turn on switch 2 and go in. The lit bulb is switch 2, the warm dark bulb is switch 1, and the cold one is switch 3.",
    },
    BrainTeaser {
        question: "Why are manhole covers round?",
        answer: "A round cover cannot fall through its opening, needs no alignment when replaced, rolls easily and spreads load evenly.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceTab {
    #[default]
    Tips,
    Questions,
    Brainteasers,
}

impl ResourceTab {
    pub fn title(&self) -> &'static str {
        match self {
            ResourceTab::Tips => "Job Search & Interview Tips",
            ResourceTab::Questions => "Common Interview Questions",
            ResourceTab::Brainteasers => "Brain Teasers",
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            ResourceTab::Tips => TIPS.len(),
            ResourceTab::Questions => QUESTION_CATEGORIES.len(),
            ResourceTab::Brainteasers => BRAIN_TEASERS.len(),
        }
    }
}

impl fmt::Display for ResourceTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Selected tab plus which items are expanded (tips and question categories)
/// or revealed (brain teaser answers).
#[derive(Debug, Clone, Default)]
pub struct ResourceBrowser {
    selected: ResourceTab,
    expanded: BTreeSet<usize>,
}

impl ResourceBrowser {
    pub fn new(selected: ResourceTab) -> Self {
        Self {
            selected,
            expanded: BTreeSet::new(),
        }
    }

    pub fn selected(&self) -> ResourceTab {
        self.selected
    }

    /// Switching tabs collapses everything.
    pub fn select(&mut self, tab: ResourceTab) {
        if tab != self.selected {
            self.selected = tab;
            self.expanded.clear();
        }
    }

    /// Flips one item. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.selected.item_count() {
            return false;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
        true
    }

    pub fn expand_all(&mut self) {
        self.expanded = (0..self.selected.item_count()).collect();
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Plain-text view of the selected tab.
    pub fn render(&self) -> String {
        let mut output = format!("{}\n\n", self.selected.title());

        match self.selected {
            ResourceTab::Tips => {
                for (i, tip) in TIPS.iter().enumerate() {
                    output.push_str(&format!("{}. {}\n", i + 1, tip.title));
                    if self.is_expanded(i) {
                        output.push_str(&format!("   {}\n", tip.content));
                    }
                }
            }
            ResourceTab::Questions => {
                for (i, category) in QUESTION_CATEGORIES.iter().enumerate() {
                    output.push_str(&format!(
                        "{}. {} ({} questions)\n",
                        i + 1,
                        category.category,
                        category.questions.len()
                    ));
                    if self.is_expanded(i) {
                        for question in category.questions {
                            output.push_str(&format!("   • {}\n", question));
                        }
                    }
                }
            }
            ResourceTab::Brainteasers => {
                for (i, teaser) in BRAIN_TEASERS.iter().enumerate() {
                    output.push_str(&format!("{}. {}\n", i + 1, teaser.question));
                    if self.is_expanded(i) {
                        output.push_str(&format!("   Answer: {}\n", teaser.answer));
                    }
                }
            }
        }

        output
    }
}
