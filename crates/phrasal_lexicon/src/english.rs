//! Built-in English word list.
//!
//! Irregular forms, uncountable nouns and closed-class words. Regular words
//! need no entry: lookups create them on demand.

/// The default English lexicon, in the format described in [`crate::entry`].
pub const ENGLISH: &str = r"
# Determiners
a           determiner
the         determiner
some        determiner
every       determiner
each        determiner
this        determiner
that        determiner
these       determiner
those       determiner
any         determiner
no          determiner
all         determiner

# Pronouns
I           pronoun     person=first number=singular
me          pronoun     person=first number=singular
myself      pronoun     person=first number=singular reflexive
my          pronoun     person=first number=singular possessive
mine        pronoun     person=first number=singular possessive
you         pronoun     person=second
yourself    pronoun     person=second number=singular reflexive
yourselves  pronoun     person=second number=plural reflexive
your        pronoun     person=second possessive
yours       pronoun     person=second possessive
he          pronoun     person=third number=singular gender=masculine
him         pronoun     person=third number=singular gender=masculine
himself     pronoun     person=third number=singular gender=masculine reflexive
his         pronoun     person=third number=singular gender=masculine possessive
she         pronoun     person=third number=singular gender=feminine
her         pronoun     person=third number=singular gender=feminine
herself     pronoun     person=third number=singular gender=feminine reflexive
hers        pronoun     person=third number=singular gender=feminine possessive
it          pronoun     person=third number=singular gender=neuter
itself      pronoun     person=third number=singular gender=neuter reflexive
its         pronoun     person=third number=singular gender=neuter possessive
we          pronoun     person=first number=plural
us          pronoun     person=first number=plural
ourselves   pronoun     person=first number=plural reflexive
our         pronoun     person=first number=plural possessive
ours        pronoun     person=first number=plural possessive
they        pronoun     person=third number=plural
them        pronoun     person=third number=plural
themselves  pronoun     person=third number=plural reflexive
their       pronoun     person=third number=plural possessive
theirs      pronoun     person=third number=plural possessive
there       pronoun     expletive_subject non_morph
who         pronoun
what        pronoun

# Prepositions
about       preposition
after       preposition
at          preposition
before      preposition
behind      preposition
by          preposition
for         preposition
from        preposition
in          preposition
into        preposition
of          preposition
on          preposition
since       preposition
to          preposition
under       preposition
with        preposition

# Conjunctions
and         conjunction
or          conjunction
but         conjunction
nor         conjunction

# Complementisers
that        complementiser
which       complementiser
whom        complementiser
where       complementiser
when        complementiser
whether     complementiser
if          complementiser

# Modals
can         modal
could       modal
may         modal
might       modal
must        modal
shall       modal
should      modal
will        modal
would       modal

# Irregular verbs
be          verb        irreg present3s=is past=was past_participle=been present_participle=being
have        verb        irreg present3s=has past=had past_participle=had
do          verb        irreg present3s=does past=did past_participle=done
go          verb        irreg present3s=goes past=went past_participle=gone
get         verb        irreg past=got past_participle=got present_participle=getting
give        verb        irreg past=gave past_participle=given
take        verb        irreg past=took past_participle=taken
make        verb        irreg past=made past_participle=made
see         verb        irreg past=saw past_participle=seen
eat         verb        irreg past=ate past_participle=eaten
fall        verb        irreg past=fell past_participle=fallen
run         verb        irreg past=ran past_participle=run present_participle=running
say         verb        irreg past=said past_participle=said
come        verb        irreg past=came past_participle=come
know        verb        irreg past=knew past_participle=known
think       verb        irreg past=thought past_participle=thought
write       verb        irreg past=wrote past_participle=written
speak       verb        irreg past=spoke past_participle=spoken
buy         verb        irreg past=bought past_participle=bought
bring       verb        irreg past=brought past_participle=brought
find        verb        irreg past=found past_participle=found
leave       verb        irreg past=left past_participle=left
tell        verb        irreg past=told past_participle=told
feel        verb        irreg past=felt past_participle=felt
sleep       verb        irreg past=slept past_participle=slept
drink       verb        irreg past=drank past_participle=drunk
sing        verb        irreg past=sang past_participle=sung
begin       verb        irreg past=began past_participle=begun present_participle=beginning
drive       verb        irreg past=drove past_participle=driven
bear        verb        irreg past=bore past_participle=born
upset       verb        irreg past=upset past_participle=upset present_participle=upsetting
hit         verb        irreg past=hit past_participle=hit present_participle=hitting
put         verb        irreg past=put past_participle=put present_participle=putting
sit         verb        irreg past=sat past_participle=sat present_participle=sitting
lie         verb        irreg past=lay past_participle=lain present_participle=lying

# Doubled-consonant verbs
stop        verb        regd
drop        verb        regd
plan        verb        regd
chat        verb        regd
hug         verb        regd

# Common regular verbs
abandon     verb
affect      verb
chase       verb
cry         verb
kick        verb
kiss        verb
like        verb
pick        verb
play        verb
walk        verb

# Nouns
man         noun        plural=men
woman       noun        plural=women
child       noun        plural=children
person      noun        plural=people
mouse       noun        plural=mice
foot        noun        plural=feet
tooth       noun        plural=teeth
goose       noun        plural=geese
sheep       noun        inv
fish        noun        noncount
cactus      noun        glreg
fungus      noun        glreg
stimulus    noun        glreg
asthma      noun        noncount
diabetes    noun        noncount
milk        noun        noncount
water       noun        noncount
information noun        noncount
mayonnaise  noun        noncount
poker       noun        noncount
recession   noun
value       noun
dog         noun
cat         noun
rock        noun
curtain     noun
room        noun
house       noun
flower      noun
ball        noun
toy         noun
pie         noun
shop        noun
park        noun
boy         noun
sandwich    noun
week        noun
fortnight   noun

# Proper nouns
Mary        noun        proper
John        noun        proper
Jane        noun        proper
Andrew      noun        proper
Susan       noun        proper
George      noun        proper
Jake        noun        proper
Albert      noun        proper
Edinburgh   noun        proper

# Adjectives
good        adjective   irreg comparative=better superlative=best
bad         adjective   irreg comparative=worse superlative=worst
far         adjective   irreg comparative=further superlative=furthest
big         adjective   regd
fat         adjective   regd
hot         adjective   regd
sad         adjective   regd
happy       adjective
angry       adjective
fine        adjective
black       adjective
beautiful   adjective
stunning    adjective
salacious   adjective
enormous    adjective
idiotic     adjective

# Adverbs
well        adverb      irreg comparative=better superlative=best
quickly     adverb
slowly      adverb
very        adverb
incredibly  adverb
amazingly   adverb
tomorrow    adverb
however     adverb      sentence_modifier
fortunately adverb      sentence_modifier
unfortunately adverb    sentence_modifier
";
