//! Built-in travel taxonomy

use crate::domain::Node;

/// Question asked at the root of the default tree.
pub const ROOT_QUESTION: &str = "Do you like warm weather?";

/// Build the default decision tree.
///
/// Cold destinations split by snow, urban, cultural, tech and historic/museum
/// preferences; warm ones by beaches, desert, coastal and tropical preferences.
/// Every question has two children and every destination appears once.
pub fn default_tree() -> Node {
    Node::question(ROOT_QUESTION, cold(), warm())
}

fn cold() -> Node {
    let northern = Node::question(
        "Do you want to see the northern lights?",
        Node::leaf("Scottish Highlands"),
        Node::leaf("Reykjavik"),
    );

    let tech = Node::question(
        "Do you enjoy technology and anime?",
        Node::leaf("Berlin"),
        Node::question(
            "Do you enjoy K-pop?",
            Node::leaf("Tokyo"),
            Node::leaf("Seoul"),
        ),
    );

    let historic = Node::question(
        "Do you like historic ruins?",
        Node::question(
            "Do you enjoy museums?",
            Node::leaf("Amsterdam"),
            Node::leaf("Paris"),
        ),
        Node::question(
            "Do you prefer Italian food?",
            Node::leaf("Istanbul"),
            Node::leaf("Rome"),
        ),
    );

    let urban = Node::question(
        "Do you prefer urban destinations?",
        northern,
        Node::question("Do you enjoy cultural landmarks?", tech, historic),
    );

    let snow = Node::question(
        "Do you prefer Europe?",
        Node::question(
            "Do you prefer the Rocky Mountains?",
            Node::leaf("Hokkaido"),
            Node::leaf("Colorado"),
        ),
        Node::question(
            "Do you want a luxury resort?",
            Node::leaf("Lapland"),
            Node::leaf("Swiss Alps"),
        ),
    );

    Node::question("Do you like snowy vacations?", urban, snow)
}

fn warm() -> Node {
    let coastal = Node::question(
        "Would you like coastal mountains?",
        Node::question(
            "Do you enjoy street food?",
            Node::leaf("Seville"),
            Node::leaf("Bangkok"),
        ),
        Node::question(
            "Do you prefer South America?",
            Node::leaf("Cape Town"),
            Node::leaf("Rio de Janeiro"),
        ),
    );

    let desert = Node::question(
        "Do you enjoy desert landscapes?",
        coastal,
        Node::leaf("Dubai"),
    );

    let tropical = Node::question(
        "Do you prefer the Pacific Ocean?",
        Node::question(
            "Do you want Caribbean islands?",
            Node::leaf("Miami"),
            Node::leaf("Barbados"),
        ),
        Node::question(
            "Do you want to stay in the United States?",
            Node::leaf("Fiji"),
            Node::leaf("Hawaii"),
        ),
    );

    Node::question("Do you enjoy beaches?", desert, tropical)
}
