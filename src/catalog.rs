//! Fixed option lists offered to the frontend's pickers.

pub const CUISINES: &[&str] = &[
    "Italian",
    "Chinese",
    "Mexican",
    "Indian",
    "Japanese",
    "Thai",
    "French",
    "Mediterranean",
    "American",
    "Korean",
    "Vietnamese",
    "Middle Eastern",
    "Greek",
    "Spanish",
    "German",
    "British",
    "Russian",
    "Brazilian",
    "Moroccan",
    "Ethiopian",
];

pub const MEAL_TYPES: &[&str] = &[
    "Breakfast",
    "Brunch",
    "Lunch",
    "Dinner",
    "Snack",
    "Dessert",
    "Appetizer",
    "Side Dish",
    "Soup",
    "Salad",
];

pub const DIETARY_RESTRICTIONS: &[&str] = &[
    "None",
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Nut-Free",
    "Low-Carb",
    "Keto",
    "Paleo",
    "Low-Sodium",
    "Diabetic-Friendly",
    "Heart-Healthy",
    "Halal",
    "Kosher",
];

pub const EQUIPMENT: &[&str] = &[
    "Oven",
    "Stovetop",
    "Microwave",
    "Slow Cooker",
    "Pressure Cooker",
    "Air Fryer",
    "Grill",
    "Blender",
    "Food Processor",
    "Stand Mixer",
    "Hand Mixer",
    "Toaster",
    "Rice Cooker",
    "Wok",
    "Cast Iron Pan",
    "Non-stick Pan",
    "Baking Sheet",
    "Dutch Oven",
    "Steamer",
];
